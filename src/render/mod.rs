pub mod dispatcher;
pub mod widget;
pub mod widget_model;
