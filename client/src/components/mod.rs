//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session store from context; list items receive their
//! data as props.

pub mod literature_card;
pub mod literature_form;
pub mod nav_bar;
pub mod person_card;
