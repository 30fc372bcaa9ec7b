use kurbo::Point;

/// The properties of a scene node that actions are allowed to change.
pub trait Node {
    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    fn set_flip_x(&mut self, flip_x: bool);

    fn set_flip_y(&mut self, flip_y: bool);

    /// Sets the absolute position of the node in its parent's space.
    fn set_position(&mut self, position: Point);

    fn position(&self) -> Point;
}

/// A plain node with the properties actions know about.
///
/// Nodes are visible and unflipped at the origin when created.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpriteNode {
    pub visible: bool,
    pub flip_x: bool,
    pub flip_y: bool,
    pub position: Point,
}

impl SpriteNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for SpriteNode {
    fn default() -> Self {
        Self {
            visible: true,
            flip_x: false,
            flip_y: false,
            position: Point::ZERO,
        }
    }
}

impl Node for SpriteNode {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_flip_x(&mut self, flip_x: bool) {
        self.flip_x = flip_x;
    }

    fn set_flip_y(&mut self, flip_y: bool) {
        self.flip_y = flip_y;
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn position(&self) -> Point {
        self.position
    }
}
