mod global;
mod helpers;
mod severity;
