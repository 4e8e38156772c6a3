//! Declaration nodes and the rule-tree export.
//!
//! A [`Decl`] bundles an optional property bag with mixins, nested rules
//! and media rules. Exporting flattens the tree into an ordered mapping of
//! selector keys to property bags, with one `@media` entry per media
//! bucket after all plain rules.
//!
//! Ordering works on rule groups. Every independent contributor (the
//! export root and each `Decl` mixin) fills its own group while it is
//! walked; nested rules and media rules write into the group of the node
//! that reached them. Within one group and bucket a selector key may be
//! claimed only once. Closed groups are reconciled per bucket by merging
//! their key sequences into one global order and folding the property bags
//! over it, so later contributors override earlier ones property by
//! property while the first writer keeps the key position.

use indexmap::IndexMap;

use crate::context::{Context, SelectorList, SelectorSpec};
use crate::error::{Error, Result};
use crate::merge::merge;
use crate::props::{Export, ExportEntry, Props, RuleSet};

/// Body of a mixin, nested rule or media rule.
#[derive(Debug, Clone)]
pub enum RuleBody {
    /// A plain property bag attached as a single rule.
    Props(Props),
    /// A whole declaration subtree.
    Decl(Decl),
}

impl From<Props> for RuleBody {
    fn from(props: Props) -> Self {
        RuleBody::Props(props)
    }
}

impl From<Decl> for RuleBody {
    fn from(decl: Decl) -> Self {
        RuleBody::Decl(decl)
    }
}

/// A declaration node.
///
/// Whether the node carries a property bag is significant: a node built
/// with [`Decl::with_props`] claims its resolved selector in the export,
/// even with an empty bag, while a bare [`Decl::new`] node only structures
/// the tree and emits nothing for itself.
///
/// ```
/// use styletree::{props, Decl, SelectorSpec};
///
/// let tree = Decl::with_props(props! { "color" => "#333" })
///     .nest(SelectorSpec::map(|s: &str| format!("{s}:hover")), props! { "color" => "#666" });
///
/// let export = tree.export_at([".foo"]).unwrap();
/// let keys: Vec<_> = export.keys().map(String::as_str).collect();
/// assert_eq!(keys, vec![".foo", ".foo:hover"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decl {
    props: Option<Props>,
    mixins: Vec<RuleBody>,
    nested: Vec<(SelectorSpec, RuleBody)>,
    media: Vec<(String, RuleBody)>,
}

impl Decl {
    /// A structural node that claims no rule of its own.
    pub fn new() -> Self {
        Decl::default()
    }

    /// A node that claims its resolved selector with `props`.
    pub fn with_props(props: Props) -> Self {
        Decl {
            props: Some(props),
            ..Decl::default()
        }
    }

    /// Applies a mixin. Mixins contribute their own rule groups ahead of
    /// this node's group, in application order, so the node's own props
    /// override theirs.
    pub fn mixin(mut self, body: impl Into<RuleBody>) -> Self {
        self.mixins.push(body.into());
        self
    }

    /// Nests a rule under this node's selector context.
    pub fn nest(mut self, selector: impl Into<SelectorSpec>, body: impl Into<RuleBody>) -> Self {
        self.nested.push((selector.into(), body.into()));
        self
    }

    /// Scopes a rule body to a media query. Accepts a raw query string or
    /// a [`crate::Media`] descriptor.
    pub fn at_media(mut self, media: impl Into<String>, body: impl Into<RuleBody>) -> Self {
        self.media.push((media.into(), body.into()));
        self
    }

    /// Exports the tree with no root selector context. Only nested rules
    /// can produce output here, the root itself has nothing to attach
    /// props or mixins to.
    pub fn export(&self) -> Result<Export> {
        self.export_with(None)
    }

    /// Exports the tree with the given selectors as the root context.
    pub fn export_at(&self, selectors: impl Into<SelectorList>) -> Result<Export> {
        self.export_with(Some(Context::root(selectors)))
    }

    fn export_with(&self, context: Option<Context>) -> Result<Export> {
        let mut exporter = Exporter::default();
        let mut group = RuleGroup::default();
        self.export_into(context.as_ref(), None, &mut exporter, &mut group)?;
        exporter.push_group(group);
        exporter.finish()
    }

    /// Walks one node: own props, then mixins, then nested rules, then
    /// media rules, in authored order. `group` is the still-open group of
    /// the contributor that reached this node; `bucket` is the active
    /// media bucket, `None` outside any media rule.
    fn export_into(
        &self,
        context: Option<&Context>,
        bucket: Option<&str>,
        exporter: &mut Exporter,
        group: &mut RuleGroup,
    ) -> Result<()> {
        if let Some(context) = context {
            if let Some(props) = &self.props {
                group.insert(bucket, context.key(), props.clone())?;
            }

            for mixin in &self.mixins {
                match mixin {
                    RuleBody::Decl(decl) => {
                        let mut own = RuleGroup::default();
                        decl.export_into(Some(context), bucket, exporter, &mut own)?;
                        exporter.push_group(own);
                    }
                    RuleBody::Props(props) => {
                        let mut own = RuleGroup::default();
                        own.insert(bucket, context.key(), props.clone())?;
                        exporter.push_group(own);
                    }
                }
            }
        } else if self.props.as_ref().is_some_and(|props| !props.is_empty()) {
            return Err(Error::MissingContext("props"));
        } else if !self.mixins.is_empty() {
            return Err(Error::MissingContext("mixins"));
        }

        for (spec, body) in &self.nested {
            let child = Context::of(spec, context);
            match body {
                RuleBody::Decl(decl) => {
                    decl.export_into(Some(&child), bucket, exporter, group)?;
                }
                RuleBody::Props(props) => {
                    group.insert(bucket, child.key(), props.clone())?;
                }
            }
        }

        if !self.media.is_empty() {
            if bucket.is_some() {
                return Err(Error::UnsupportedMediaNesting);
            }

            exporter.push_media_order(self.authored_media_order());

            for (key, body) in &self.media {
                match body {
                    RuleBody::Decl(decl) => {
                        decl.export_into(context, Some(key), exporter, group)?;
                    }
                    RuleBody::Props(props) => {
                        let Some(context) = context else {
                            return Err(Error::MissingContextForMedia);
                        };
                        group.insert(Some(key), context.key(), props.clone())?;
                    }
                }
            }
        }

        Ok(())
    }

    /// The media keys this node authored, with consecutive repeats of the
    /// same key collapsed. Non-adjacent repeats state a contradictory
    /// order and surface as [`Error::UnsatisfiableOrder`] later.
    fn authored_media_order(&self) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        for (key, _) in &self.media {
            if order.last().map(String::as_str) != Some(key.as_str()) {
                order.push(key.clone());
            }
        }
        order
    }
}

/// One contributor's rules, keyed by media bucket, then selector.
#[derive(Debug, Default)]
struct RuleGroup {
    default: RuleSet,
    media: IndexMap<String, RuleSet>,
}

impl RuleGroup {
    fn insert(&mut self, bucket: Option<&str>, selector: String, props: Props) -> Result<()> {
        let rules = match bucket {
            None => &mut self.default,
            Some(key) => self.media.entry(key.to_owned()).or_default(),
        };

        if rules.contains_key(&selector) {
            return Err(match bucket {
                None => Error::DuplicateRule { selector },
                Some(key) => Error::DuplicateMediaRule {
                    selector,
                    media: key.to_owned(),
                },
            });
        }

        rules.insert(selector, props);
        Ok(())
    }
}

/// Accumulator for one export call: closed rule groups plus the media key
/// sequences collected along the walk.
#[derive(Debug, Default)]
struct Exporter {
    groups: Vec<RuleGroup>,
    media_orders: Vec<Vec<String>>,
}

impl Exporter {
    fn push_group(&mut self, group: RuleGroup) {
        log::trace!(
            "closing rule group with {} rules, {} media buckets",
            group.default.len(),
            group.media.len(),
        );
        self.groups.push(group);
    }

    fn push_media_order(&mut self, order: Vec<String>) {
        if !order.is_empty() {
            self.media_orders.push(order);
        }
    }

    /// Reconciles the closed groups into the final mapping: default bucket
    /// first, then the media buckets in globally merged key order.
    fn finish(self) -> Result<Export> {
        let mut export = Export::new();

        let default_lists: Vec<Vec<String>> = self
            .groups
            .iter()
            .map(|group| group.default.keys().cloned().collect())
            .collect();
        for selector in merge(&default_lists)? {
            export.insert(selector, ExportEntry::Rule(Props::new()));
        }
        for group in &self.groups {
            for (selector, props) in &group.default {
                if let Some(ExportEntry::Rule(bag)) = export.get_mut(selector) {
                    for (name, value) in props {
                        bag.insert(name.clone(), value.clone());
                    }
                }
            }
        }

        for key in merge(&self.media_orders)? {
            let lists: Vec<Vec<String>> = self
                .groups
                .iter()
                .filter_map(|group| group.media.get(&key))
                .map(|rules| rules.keys().cloned().collect())
                .collect();
            if lists.is_empty() {
                continue;
            }

            let mut block = RuleSet::new();
            for selector in merge(&lists)? {
                block.insert(selector, Props::new());
            }
            for group in &self.groups {
                let Some(rules) = group.media.get(&key) else {
                    continue;
                };
                for (selector, props) in rules {
                    if let Some(bag) = block.get_mut(selector) {
                        for (name, value) in props {
                            bag.insert(name.clone(), value.clone());
                        }
                    }
                }
            }

            export.insert(format!("@media {key}"), ExportEntry::Media(block));
        }

        log::debug!(
            "exported {} entries from {} rule groups",
            export.len(),
            self.groups.len(),
        );
        Ok(export)
    }
}
