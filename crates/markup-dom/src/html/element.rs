//! HTML vocabulary.

use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::{ContainerDomain, LeafDomain, TagDomain};

/// HTML elements that have content and a closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum ContainerElement {
    A,
    Abbr,
    Address,
    Article,
    Aside,
    Audio,
    B,
    Bdi,
    Bdo,
    Blockquote,
    Body,
    Button,
    Canvas,
    Caption,
    Cite,
    Code,
    Colgroup,
    Data,
    Datalist,
    Dd,
    Del,
    Details,
    Dfn,
    Dialog,
    Div,
    Dl,
    Dt,
    Em,
    Fieldset,
    Figcaption,
    Figure,
    Footer,
    Form,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Header,
    Hgroup,
    Html,
    I,
    Iframe,
    Ins,
    Kbd,
    Label,
    Legend,
    Li,
    Main,
    Map,
    Mark,
    Menu,
    Meter,
    Nav,
    Noscript,
    Object,
    Ol,
    Optgroup,
    Output,
    P,
    Picture,
    Pre,
    Progress,
    Q,
    Rp,
    Rt,
    Ruby,
    S,
    Samp,
    Section,
    Select,
    Small,
    Span,
    Strong,
    Sub,
    Summary,
    Sup,
    Table,
    Tbody,
    Td,
    Template,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Time,
    Title,
    Tr,
    U,
    Ul,
    Var,
    Video,
}

impl TagDomain for ContainerElement {
    fn name(&self) -> &str {
        self.as_ref()
    }
}

impl ContainerDomain for ContainerElement {
    fn root() -> Self {
        ContainerElement::Html
    }
}

/// HTML elements that never have content. They are written without a
/// closing tag or a trailing slash when streamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum VoidElement {
    Area,
    Base,
    Br,
    Col,
    Embed,
    Hr,
    Img,
    Input,
    Link,
    Meta,
    Source,
    Track,
    Wbr,
}

impl TagDomain for VoidElement {
    fn name(&self) -> &str {
        self.as_ref()
    }
}

impl LeafDomain for VoidElement {
    fn is_void(&self) -> bool {
        true
    }
}

/// HTML elements whose content is not markup and is therefore never escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum UnsafeElement {
    Script,
    Style,
}

impl TagDomain for UnsafeElement {
    fn name(&self) -> &str {
        self.as_ref()
    }
}

/// HTML attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Attribute {
    Accept,
    AcceptCharset,
    Accesskey,
    Action,
    Allow,
    Alt,
    Async,
    Autocapitalize,
    Autocomplete,
    Autofocus,
    Autoplay,
    Charset,
    Checked,
    Cite,
    Class,
    Cols,
    Colspan,
    Content,
    Contenteditable,
    Controls,
    Coords,
    Crossorigin,
    Datetime,
    Decoding,
    Default,
    Defer,
    Dir,
    Disabled,
    Download,
    Draggable,
    Enctype,
    For,
    Form,
    Headers,
    Height,
    Hidden,
    High,
    Href,
    Hreflang,
    HttpEquiv,
    Id,
    Integrity,
    Inputmode,
    Itemprop,
    Kind,
    Label,
    Lang,
    List,
    Loading,
    Loop,
    Low,
    Max,
    Maxlength,
    Media,
    Method,
    Min,
    Minlength,
    Multiple,
    Muted,
    Name,
    Novalidate,
    Open,
    Optimum,
    Pattern,
    Placeholder,
    Poster,
    Preload,
    /// Not part of HTML itself; defined by RDFa for `<meta>` tags.
    Property,
    Readonly,
    Referrerpolicy,
    Rel,
    Required,
    Reversed,
    Role,
    Rows,
    Rowspan,
    Sandbox,
    Scope,
    Selected,
    Shape,
    Size,
    Sizes,
    Slot,
    Span,
    Spellcheck,
    Src,
    Srcdoc,
    Srclang,
    Srcset,
    Start,
    Step,
    Style,
    Tabindex,
    Target,
    Title,
    Translate,
    Type,
    Usemap,
    Value,
    Width,
    Wrap,
}

impl TagDomain for Attribute {
    fn name(&self) -> &str {
        self.as_ref()
    }
}

/// Values of the `rel` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Rel {
    Alternate,
    Author,
    Bookmark,
    Canonical,
    DnsPrefetch,
    External,
    Help,
    Icon,
    License,
    Manifest,
    Me,
    Modulepreload,
    Next,
    Nofollow,
    Noopener,
    Noreferrer,
    Opener,
    Pingback,
    Preconnect,
    Prefetch,
    Preload,
    Prerender,
    Prev,
    Search,
    Stylesheet,
    Tag,
    /// Search-engine extension for paid links.
    Sponsored,
    /// Search-engine extension for user-generated content.
    Ugc,
}

/// Open Graph values of the `property` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[allow(missing_docs)]
pub enum Property {
    #[strum(serialize = "og:audio")]
    OgAudio,
    #[strum(serialize = "og:audio:type")]
    OgAudioType,
    #[strum(serialize = "og:image")]
    OgImage,
    #[strum(serialize = "og:image:alt")]
    OgImageAlt,
    #[strum(serialize = "og:image:type")]
    OgImageType,
    #[strum(serialize = "og:image:width")]
    OgImageWidth,
    #[strum(serialize = "og:image:height")]
    OgImageHeight,
    #[strum(serialize = "og:video")]
    OgVideo,
    #[strum(serialize = "og:video:type")]
    OgVideoType,
    #[strum(serialize = "og:video:width")]
    OgVideoWidth,
    #[strum(serialize = "og:video:height")]
    OgVideoHeight,
    #[strum(serialize = "og:description")]
    OgDescription,
    #[strum(serialize = "og:determiner")]
    OgDeterminer,
    #[strum(serialize = "og:locale")]
    OgLocale,
    #[strum(serialize = "og:locale:alternate")]
    OgLocaleAlternate,
    #[strum(serialize = "og:site_name")]
    OgSiteName,
    #[strum(serialize = "og:title")]
    OgTitle,
    #[strum(serialize = "og:type")]
    OgType,
    #[strum(serialize = "og:url")]
    OgUrl,
}
