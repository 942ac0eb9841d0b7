// Landing page sections
// Built by the AIPilot team (c)2023

mod contact;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod mobile_menu;
mod nav;
mod testimonials;

pub use contact::Contact;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use mobile_menu::MobileMenu;
pub use nav::Nav;
pub use testimonials::Testimonials;
