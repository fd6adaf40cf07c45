#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    User,
    Mm,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const fn user(value: f64) -> Self {
        Self {
            value,
            unit: Unit::User,
        }
    }

    pub const fn mm(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Mm,
        }
    }

    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::user(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    None,
    Color(String),
    /// Paint server reference, rendered as `url(#id)`.
    Url(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub linecap: Option<LineCap>,
}

impl Stroke {
    pub fn round(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            linecap: Some(LineCap::Round),
        }
    }
}

/// `rotate(angle cx cy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotate {
    pub angle: f64,
    pub cx: f64,
    pub cy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: Option<Length>,
    pub y: Option<Length>,
    pub width: Length,
    pub height: Length,
    pub fill: Option<Fill>,
}

impl Rect {
    pub fn new(width: impl Into<Length>, height: impl Into<Length>) -> Self {
        Self {
            x: None,
            y: None,
            width: width.into(),
            height: height.into(),
            fill: None,
        }
    }

    pub fn at(mut self, x: impl Into<Length>, y: impl Into<Length>) -> Self {
        self.x = Some(x.into());
        self.y = Some(y.into());
        self
    }

    pub fn at_y(mut self, y: impl Into<Length>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn fill(mut self, color: &str) -> Self {
        self.fill = Some(Fill::Color(color.to_string()));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: f64,
    pub fill: Fill,
    pub mask: Option<String>,
    pub transform: Option<Rotate>,
}

impl Circle {
    pub fn new(r: f64, fill: Fill) -> Self {
        Self {
            cx: None,
            cy: None,
            r,
            fill,
            mask: None,
            transform: None,
        }
    }

    pub fn at(mut self, cx: f64, cy: f64) -> Self {
        self.cx = Some(cx);
        self.cy = Some(cy);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub d: String,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

/// `<use>` instance of a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Use {
    pub href: String,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub transform: Option<Rotate>,
    pub fill: Option<Fill>,
}

impl Use {
    pub fn new(href: &str, x: f64, y: f64) -> Self {
        Self {
            href: href.to_string(),
            x,
            y,
            width: None,
            transform: None,
            fill: None,
        }
    }

    pub fn rotated(mut self, angle: f64, cx: f64, cy: f64) -> Self {
        self.transform = Some(Rotate { angle, cx, cy });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect(Rect),
    Circle(Circle),
    Line(Line),
    Path(PathElement),
    Use(Use),
    Group(Group),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub id: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    pub id: String,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Def {
    Symbol(Symbol),
    Mask(Mask),
    Pattern(Pattern),
}

impl Def {
    pub fn id(&self) -> &str {
        match self {
            Self::Symbol(symbol) => &symbol.id,
            Self::Mask(mask) => &mask.id,
            Self::Pattern(pattern) => &pattern.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: Length,
    pub height: Length,
    pub view_box: Option<(f64, f64, f64, f64)>,
    /// Emit the XML prolog and SVG 1.1 doctype.
    pub standalone: bool,
    pub defs: Vec<Def>,
    pub body: Vec<Element>,
}

impl Document {
    pub fn new(width: Length, height: Length) -> Self {
        Self {
            width,
            height,
            view_box: None,
            standalone: false,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn def(&self, id: &str) -> Option<&Def> {
        self.defs.iter().find(|def| def.id() == id)
    }

    /// All `<use>` instances referencing `id`, including those nested in groups.
    pub fn uses_of(&self, id: &str) -> Vec<&Use> {
        let mut out = Vec::new();
        collect_uses(&self.body, id, &mut out);
        out
    }
}

fn collect_uses<'a>(elements: &'a [Element], id: &str, out: &mut Vec<&'a Use>) {
    for element in elements {
        match element {
            Element::Use(instance) if instance.href == id => out.push(instance),
            Element::Group(group) => collect_uses(&group.children, id, out),
            _ => {}
        }
    }
}
