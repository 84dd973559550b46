// Terminal front end for browsing slates, exposed as a library so the event
// handling and widgets can be tested without a terminal.

pub mod tui;
