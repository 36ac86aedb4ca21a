pub mod scroll;
