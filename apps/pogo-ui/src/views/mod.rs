mod animation_view;
mod plot_view;

pub use animation_view::AnimationView;
pub use plot_view::PlotView;
