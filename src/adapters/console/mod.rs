//! Console Transport Adapter
//!
//! Drives the conversation handler from a line-oriented stream. Slash
//! commands stand in for buttons and callbacks:
//!
//! | line | action |
//! |---|---|
//! | `/start`, `/cancel` | entry / cancel commands |
//! | `/tone` | switch tone |
//! | `/summary` | request summary |
//! | `/more <intent>` | another variant |
//! | `/menu` | print the menu |
//! | `/quit` | leave the loop |
//! | anything else | menu pick or free text |

mod input;
mod render;
mod transport;

pub use input::ConsoleInput;
pub use render::{menu, render_reply};
pub use transport::{ConsoleTransport, CONSOLE_USER_ID};
