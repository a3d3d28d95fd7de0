//! Built-in [`Inspect`] implementations.
//!
//! ## Implemented Menu
//!
//! - Scalar:
//!     - `bool`, `char`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `String`, `&str`, `Box<str>`, `Arc<str>`, `Cow<str>`
//! - Sequence:
//!     - `Vec<T>`, `VecDeque<T>`, `[T; N]`, `&[T]`, `Box<[T]>`
//! - Reference:
//!     - `Option<T>` (nil when `None`)
//!     - `Box<T>`, `Arc<T>`, `&T` (never nil)
//! - Map:
//!     - `BTreeMap<K, V>`
//!     - `HashMap<K, V, S>` ("std" feature)
//!
//! [`Inspect`]: crate::Inspect

// -----------------------------------------------------------------------------
// Modules

mod map;
mod reference;
mod scalar;
mod sequence;
