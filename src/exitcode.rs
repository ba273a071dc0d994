//! Process exit codes, numbered as in BSD `sysexits.h`.
//!
//! Apart from 0 these are the only codes the binary exits with.

/// Bad invocation: `-C` is not a directory, or `config init` would overwrite a file
pub const USAGE: i32 = 64;

/// The sitemap file is missing or is not a regular file
pub const NOINPUT: i32 = 66;

/// The parsed tree could not be rendered
pub const SOFTWARE: i32 = 70;

/// Reading the sitemap or writing the output failed
pub const IOERR: i32 = 74;

/// A config file or `MFNF_SITEMAP_*` variable is invalid
pub const CONFIG: i32 = 78;
