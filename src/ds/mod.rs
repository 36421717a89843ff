//! Internal data structures shared by the cache policy layer.

pub mod intrusive_list;
pub mod slot_arena;

pub use intrusive_list::IntrusiveList;
pub use slot_arena::{SlotArena, SlotId};
