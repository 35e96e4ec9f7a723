pub mod amount_input;
pub mod charts;
pub mod icons;
pub mod modal;
pub mod stat_card;
pub mod toast;
