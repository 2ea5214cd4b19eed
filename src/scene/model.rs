//! Positioned scene tree and its SVG serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::animation::pose::Pose;
use crate::catalog::scope::IdScope;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Vec2};
use crate::foundation::error::{ElfError, ElfResult};
use crate::scene::composer::{BodyMetrics, RenderMode};

/// One entry of an SVG `transform` list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SvgTransform {
    /// `translate(x, y)`
    Translate(Vec2),
    /// `rotate(deg, cx, cy)`
    Rotate {
        /// Angle in degrees, clockwise on screen.
        degrees: f64,
        /// Rotation center.
        center: Point,
    },
    /// `scale(sx, sy)`
    Scale(Vec2),
    /// `matrix(a, b, c, d, e, f)`
    Matrix(Affine),
}

impl SvgTransform {
    /// Equivalent affine map.
    pub fn to_affine(self) -> Affine {
        match self {
            SvgTransform::Translate(v) => Affine::translate(v),
            SvgTransform::Rotate { degrees, center } => {
                Affine::rotate_about(degrees.to_radians(), center)
            }
            SvgTransform::Scale(s) => Affine::scale_non_uniform(s.x, s.y),
            SvgTransform::Matrix(a) => a,
        }
    }

    /// SVG syntax of this entry.
    pub fn to_svg_string(self) -> String {
        match self {
            SvgTransform::Translate(v) => format!("translate({}, {})", num(v.x), num(v.y)),
            SvgTransform::Rotate { degrees, center } => format!(
                "rotate({}, {}, {})",
                num(degrees),
                num(center.x),
                num(center.y)
            ),
            SvgTransform::Scale(s) => format!("scale({}, {})", num(s.x), num(s.y)),
            SvgTransform::Matrix(a) => {
                let [a, b, c, d, e, f] = a.as_coeffs();
                format!(
                    "matrix({}, {}, {}, {}, {}, {})",
                    num(a),
                    num(b),
                    num(c),
                    num(d),
                    num(e),
                    num(f)
                )
            }
        }
    }
}

/// Composite of a transform list, applied left to right as in SVG.
pub fn compose_transforms(list: &[SvgTransform]) -> Affine {
    list.iter()
        .fold(Affine::IDENTITY, |acc, t| acc * t.to_affine())
}

/// Node of the rendered scene.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// `<g>`
    Group {
        /// Space separated CSS classes.
        class: Option<String>,
        /// Transform list.
        transform: Vec<SvgTransform>,
        /// Children in paint order.
        children: Vec<SceneNode>,
    },
    /// `<path>`
    Path {
        /// CSS classes.
        class: String,
        /// Path data.
        d: String,
        /// Transform list.
        transform: Vec<SvgTransform>,
        /// Optional `pathLength`.
        path_length: Option<f64>,
    },
    /// `<circle>`
    Circle {
        /// CSS classes.
        class: String,
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// `<rect>`
    Rect {
        /// CSS classes.
        class: String,
        /// Geometry.
        rect: Rect,
    },
    /// Catalog markup inserted verbatim.
    Fragment(String),
}

impl SceneNode {
    /// Group with an optional class.
    pub fn group(
        class: Option<&str>,
        transform: Vec<SvgTransform>,
        children: Vec<SceneNode>,
    ) -> Self {
        SceneNode::Group {
            class: class.map(str::to_owned),
            transform,
            children,
        }
    }

    /// Untransformed path.
    pub fn path(class: &str, d: impl Into<String>) -> Self {
        SceneNode::Path {
            class: class.to_owned(),
            d: d.into(),
            transform: Vec::new(),
            path_length: None,
        }
    }

    /// Whether `class` is one of this node's classes.
    pub fn has_class(&self, class: &str) -> bool {
        let classes = match self {
            SceneNode::Group { class: Some(c), .. } => c.as_str(),
            SceneNode::Path { class: c, .. }
            | SceneNode::Circle { class: c, .. }
            | SceneNode::Rect { class: c, .. } => c.as_str(),
            _ => return false,
        };
        classes.split_ascii_whitespace().any(|c| c == class)
    }

    /// Children of a group; empty for leaves.
    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// First node (depth-first, paint order) carrying `class`, with the transform mapping its
    /// local frame into the frame of `self`'s parent.
    pub fn find_by_class(&self, class: &str) -> Option<(Affine, &SceneNode)> {
        self.find_with(Affine::IDENTITY, class)
    }

    fn find_with(&self, parent: Affine, class: &str) -> Option<(Affine, &SceneNode)> {
        let local = match self {
            SceneNode::Group { transform, .. } | SceneNode::Path { transform, .. } => {
                parent * compose_transforms(transform)
            }
            _ => parent,
        };
        if self.has_class(class) {
            return Some((local, self));
        }
        self.children()
            .iter()
            .find_map(|child| child.find_with(local, class))
    }

    fn write_svg(&self, w: &mut SvgWriter) -> ElfResult<()> {
        match self {
            SceneNode::Group {
                class,
                transform,
                children,
            } => {
                let mut el = BytesStart::new("g");
                if let Some(class) = class {
                    el.push_attribute(("class", class.as_str()));
                }
                push_transform(&mut el, transform);
                if children.is_empty() {
                    return emit(w, Event::Empty(el));
                }
                emit(w, Event::Start(el))?;
                for child in children {
                    child.write_svg(w)?;
                }
                emit(w, Event::End(BytesEnd::new("g")))
            }
            SceneNode::Path {
                class,
                d,
                transform,
                path_length,
            } => {
                let mut el = BytesStart::new("path");
                el.push_attribute(("class", class.as_str()));
                push_transform(&mut el, transform);
                el.push_attribute(("d", d.as_str()));
                if let Some(len) = path_length {
                    el.push_attribute(("pathLength", num(*len).as_str()));
                }
                emit(w, Event::Empty(el))
            }
            SceneNode::Circle {
                class,
                center,
                radius,
            } => {
                let mut el = BytesStart::new("circle");
                el.push_attribute(("class", class.as_str()));
                el.push_attribute(("cx", num(center.x).as_str()));
                el.push_attribute(("cy", num(center.y).as_str()));
                el.push_attribute(("r", num(*radius).as_str()));
                emit(w, Event::Empty(el))
            }
            SceneNode::Rect { class, rect } => {
                let mut el = BytesStart::new("rect");
                el.push_attribute(("class", class.as_str()));
                el.push_attribute(("x", num(rect.x0).as_str()));
                el.push_attribute(("y", num(rect.y0).as_str()));
                el.push_attribute(("width", num(rect.width()).as_str()));
                el.push_attribute(("height", num(rect.height()).as_str()));
                emit(w, Event::Empty(el))
            }
            // Catalog markup is already serialized.
            SceneNode::Fragment(markup) => {
                emit(w, Event::Text(BytesText::from_escaped(markup.as_str())))
            }
        }
    }
}

/// Fully positioned character for one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedScene {
    /// Namespace of this character's style rules.
    pub scope: IdScope,
    /// Live (animated CSS) or static.
    pub mode: RenderMode,
    /// SVG `viewBox`.
    pub view_box: Rect,
    /// Pose the scene was built from.
    pub pose: Pose,
    /// Whether a dance was active.
    pub dancing: bool,
    /// Derived proportions.
    pub metrics: BodyMetrics,
    /// Complete style sheet.
    pub style: String,
    /// Character group.
    pub root: SceneNode,
}

impl RenderedScene {
    /// Serialize as a standalone SVG document. `size` sets explicit `width`/`height`, which
    /// rasterizers use instead of the natural size.
    pub fn to_svg(&self, size: Option<Canvas>) -> ElfResult<String> {
        let mut w = Writer::new(Vec::with_capacity(8 * 1024));

        let vb = self.view_box;
        let view_box = format!(
            "{} {} {} {}",
            num(vb.x0),
            num(vb.y0),
            num(vb.width()),
            num(vb.height())
        );
        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", SVG_NS));
        svg.push_attribute(("xmlns:xlink", XLINK_NS));
        svg.push_attribute(("id", self.scope.as_str()));
        svg.push_attribute(("viewBox", view_box.as_str()));
        if let Some(size) = size {
            svg.push_attribute(("width", size.width.to_string().as_str()));
            svg.push_attribute(("height", size.height.to_string().as_str()));
        }
        emit(&mut w, Event::Start(svg))?;

        emit(&mut w, Event::Start(BytesStart::new("style")))?;
        emit(&mut w, Event::Text(BytesText::new(&self.style)))?;
        emit(&mut w, Event::End(BytesEnd::new("style")))?;

        self.root.write_svg(&mut w)?;
        emit(&mut w, Event::End(BytesEnd::new("svg")))?;

        String::from_utf8(w.into_inner())
            .map_err(|e| ElfError::render(format!("svg output is not utf-8: {e}")))
    }
}

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

type SvgWriter = Writer<Vec<u8>>;

fn emit(w: &mut SvgWriter, event: Event<'_>) -> ElfResult<()> {
    w.write_event(event)
        .map_err(|e| ElfError::render(format!("write svg: {e}")))
}

fn push_transform(el: &mut BytesStart<'_>, list: &[SvgTransform]) {
    if list.is_empty() {
        return;
    }
    let value = list
        .iter()
        .map(|t| t.to_svg_string())
        .collect::<Vec<_>>()
        .join(" ");
    el.push_attribute(("transform", value.as_str()));
}

/// Format a coordinate: rounded to 1e-4, no negative zero.
pub(crate) fn num(v: f64) -> String {
    let r = (v * 10_000.0).round() / 10_000.0;
    if r == 0.0 || !r.is_finite() {
        "0".to_owned()
    } else {
        r.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
