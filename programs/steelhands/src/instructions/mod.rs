#![allow(ambiguous_glob_reexports)]

pub mod activate;
pub mod close;
pub mod deposit;
pub mod initialize;
pub mod update;
pub mod withdraw;

pub use activate::*;
pub use close::*;
pub use deposit::*;
pub use initialize::*;
pub use update::*;
pub use withdraw::*;
