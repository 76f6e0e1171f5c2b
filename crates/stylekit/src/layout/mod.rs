//! Flexbox and grid layout helpers.
//!
//! Flex helpers build plain style objects. Grid helpers accept responsive
//! values and resolve them with [`resolve_static`](crate::resolve::resolve_static).

mod flex;
mod grid;

pub use flex::{FlexAlign, FlexDirection, FlexJustify, flex_container, flex_item};
pub use grid::{GridAlign, GridContainer, GridContentAlign, GridItem, GridLine, GridTrack};
