//! Terminal presentation: the header shell, theme, layout, renderer and the
//! interactive chat loop.

pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod shell;
pub mod theme;
