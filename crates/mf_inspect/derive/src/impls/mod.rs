// -----------------------------------------------------------------------------
// Modules

mod struct_kind;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use struct_kind::impl_inspect;
