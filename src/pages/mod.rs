//! Page modules. Pages own screen-level orchestration and delegate
//! rendering details to `components`.

pub mod home;
