//! SVG vocabulary.

use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::{ContainerDomain, LeafDomain, TagDomain};

/// SVG elements that have content and a closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
#[allow(missing_docs)]
pub enum ContainerElement {
    A,
    ClipPath,
    Defs,
    Desc,
    G,
    LinearGradient,
    Marker,
    Mask,
    Pattern,
    RadialGradient,
    Svg,
    Switch,
    Symbol,
    Text,
    TextPath,
    Title,
    Tspan,
}

impl TagDomain for ContainerElement {
    fn name(&self) -> &str {
        self.as_ref()
    }
}

impl ContainerDomain for ContainerElement {
    fn root() -> Self {
        ContainerElement::Svg
    }
}

/// SVG elements without content. All of them self-close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
#[allow(missing_docs)]
pub enum LeafElement {
    Circle,
    Ellipse,
    Image,
    Line,
    Path,
    Polygon,
    Polyline,
    Rect,
    Stop,
    Use,
}

impl TagDomain for LeafElement {
    fn name(&self) -> &str {
        self.as_ref()
    }
}

impl LeafDomain for LeafElement {
    fn is_void(&self) -> bool {
        true
    }
}

/// SVG attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Attribute {
    Class,
    ClipPath,
    Cx,
    Cy,
    D,
    DominantBaseline,
    Dx,
    Dy,
    Fill,
    FillOpacity,
    FillRule,
    FontFamily,
    FontSize,
    FontWeight,
    Fx,
    Fy,
    #[strum(serialize = "gradientTransform")]
    GradientTransform,
    #[strum(serialize = "gradientUnits")]
    GradientUnits,
    Height,
    Href,
    Id,
    Mask,
    Offset,
    Opacity,
    #[strum(serialize = "patternUnits")]
    PatternUnits,
    Points,
    #[strum(serialize = "preserveAspectRatio")]
    PreserveAspectRatio,
    R,
    Role,
    Rx,
    Ry,
    StopColor,
    StopOpacity,
    Stroke,
    StrokeDasharray,
    StrokeLinecap,
    StrokeLinejoin,
    StrokeOpacity,
    StrokeWidth,
    Style,
    TextAnchor,
    Transform,
    #[strum(serialize = "viewBox")]
    ViewBox,
    Width,
    X,
    #[strum(serialize = "x1")]
    X1,
    #[strum(serialize = "x2")]
    X2,
    Xmlns,
    Y,
    #[strum(serialize = "y1")]
    Y1,
    #[strum(serialize = "y2")]
    Y2,
}

impl TagDomain for Attribute {
    fn name(&self) -> &str {
        self.as_ref()
    }
}
