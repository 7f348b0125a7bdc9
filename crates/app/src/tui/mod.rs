pub mod model;
pub mod update;
pub mod view;

pub use model::AppModel;
pub use update::TuiUpdate;
pub use view::TuiView;
