pub mod countdown;
pub mod faq;
pub mod flash;
pub mod hero;
pub mod modal;
pub mod nav_bar;
pub mod rsvp_form;
