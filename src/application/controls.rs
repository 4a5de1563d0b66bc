/// Current values of the numeric inputs, read fresh on every use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

