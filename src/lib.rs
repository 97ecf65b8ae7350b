//! # ViewComb - Lazy Sequence View Combinators
//!
//! A library of lazy, composable views over bounded sequences: slices,
//! null-terminated character data, and sequences of sequences.
//!
//! A view is a position paired with an end marker. Adapters wrap the
//! position of their source and compute each element on demand, so a
//! pipeline never allocates an intermediate collection. The library
//! emphasizes:
//!
//! - **Laziness**: Elements are computed when a position is read, and recomputed on every read
//! - **Two end disciplines**: A view ends at a peer position or at the zero-size [`Terminal`] tag
//! - **Compose-time capabilities**: Reversal, direct back access and sizing are selected through trait bounds
//! - **Value semantics**: Views and positions are plain copyable values with no shared state
//!
//! ```
//! use viewcomb::{cstring, filter, join, map};
//!
//! let vowels = filter(cstring(b"helloworld!\0"), |c: &u8| b"aeiou".contains(c));
//! assert_eq!(vowels.collect_as::<Vec<u8>>(), b"eoo".to_vec());
//!
//! let shouted = map(join(cstring(b"ab\0"), cstring(b"-\0")), |c: u8| c.to_ascii_uppercase());
//! assert_eq!(shouted.collect_as::<Vec<u8>>(), b"A-B".to_vec());
//! ```

pub mod capability;
pub mod chain;
pub mod character;
pub mod concat;
pub mod cstring;
pub mod end_marker;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod format;
pub mod join;
pub mod map;
pub mod position;
pub mod positions;
pub mod reverse;
pub mod skip;
pub mod take;
pub mod view;

pub use capability::{DirectBack, IntoCommon, LastElement, Swappable, ToCommon};
pub use chain::{Chain, chain};
pub use character::Character;
pub use concat::{ConcatPosition, concat};
pub use cstring::{CStringView, cstr, cstring, cstring_counted, cstring_range};
pub use end_marker::{EndMarker, Terminal};
pub use error::ViewError;
pub use filter::{FilterPosition, filter};
pub use flatten::{FlattenPosition, flatten};
pub use format::{Formatted, format};
pub use join::{JoinPosition, join};
pub use map::{MapPosition, copied, map};
pub use position::{Bidirectional, Category, Exhaustible, Homogeneous, Position, RandomAccess};
pub use positions::{CStrPosition, SlicePosition};
pub use reverse::{ReverseWith, Reversed, reverse};
pub use skip::{skip, try_skip};
pub use take::{TakePosition, counted, slice, take, try_slice};
pub use view::{IntoView, Iter, View, to_common, view};
