use crate::chess::Piece;
use derive_more::Display;

/// Handle to the visual asset of a [`Piece`].
///
/// The handle is acquired when a [`Figure`][`crate::chess::Figure`] is constructed and
/// released with it. It only names the asset, loading and drawing it is up to the renderer.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}", path)]
pub struct Sprite {
    path: &'static str,
}

macro_rules! sprites {
    ($($role:ident),*) => {
        impl Sprite {
            /// The sprite of a [`Piece`].
            pub fn of(p: Piece) -> Self {
                use crate::chess::{Color, Role};
                let path = match (p.role(), p.color()) {
                    $(
                        (Role::$role, Color::White) => concat!("assets/sprites/", stringify!($role), "-white.png"),
                        (Role::$role, Color::Black) => concat!("assets/sprites/", stringify!($role), "-black.png"),
                    )*
                };

                Sprite { path }
            }
        }
    };
}

sprites!(Pawn, Knight, Bishop, Rook, Queen, King);

impl Sprite {
    /// The path to the asset, relative to the working directory.
    pub fn path(&self) -> &'static str {
        self.path
    }
}
