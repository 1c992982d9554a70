use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    #[prop_or_default]
    pub edge: Edge,
    #[prop_or(3)]
    pub thickness: u32,
    #[prop_or_default]
    pub show_percentage: bool,
}

/// Inline style for the fixed track and for the fill at `progress` percent.
pub fn bar_styles(edge: Edge, thickness: u32, progress: f64) -> (String, String) {
    let (track, fill) = match edge {
        Edge::Top => (
            format!("top: 0; left: 0; right: 0; height: {}px;", thickness),
            format!("width: {:.2}%; height: 100%;", progress),
        ),
        Edge::Bottom => (
            format!("bottom: 0; left: 0; right: 0; height: {}px;", thickness),
            format!("width: {:.2}%; height: 100%;", progress),
        ),
        Edge::Left => (
            format!("top: 0; left: 0; bottom: 0; width: {}px;", thickness),
            format!("height: {:.2}%; width: 100%;", progress),
        ),
        Edge::Right => (
            format!("top: 0; right: 0; bottom: 0; width: {}px;", thickness),
            format!("height: {:.2}%; width: 100%;", progress),
        ),
    };
    (track, fill)
}

#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    // Only here to re-render on scroll.
    let _ = use_window_scroll();
    let progress = dom::page_progress();
    let (track, fill) = bar_styles(props.edge, props.thickness, progress);

    html! {
        <>
            <div class="scroll-track" style={track}>
                <div class="scroll-fill" style={fill}></div>
            </div>
            if props.show_percentage {
                <div class={classes!("scroll-percentage", (progress > 5.0).then(|| "visible"))}>
                    {format!("{}%", progress.round())}
                </div>
            }
            <style>
                {r#"
                    .scroll-track {
                        position: fixed;
                        z-index: 60;
                        background: rgba(229, 231, 235, 0.3);
                        backdrop-filter: blur(8px);
                    }

                    .scroll-fill {
                        position: absolute;
                        top: 0;
                        left: 0;
                        background: linear-gradient(90deg, #2563eb, #14b8a6);
                        transition: all 0.1s ease-out;
                    }

                    .scroll-percentage {
                        position: fixed;
                        top: 5rem;
                        right: 1rem;
                        z-index: 60;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.9);
                        border: 1px solid #e5e7eb;
                        font-size: 0.875rem;
                        opacity: 0;
                        transition: opacity 0.3s ease-in-out;
                    }

                    .scroll-percentage.visible {
                        opacity: 1;
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_edges_fill_width() {
        let (track, fill) = bar_styles(Edge::Top, 3, 42.5);
        assert!(track.contains("height: 3px"));
        assert_eq!(fill, "width: 42.50%; height: 100%;");
    }

    #[test]
    fn vertical_edges_fill_height() {
        let (track, fill) = bar_styles(Edge::Right, 4, 10.0);
        assert!(track.starts_with("top: 0; right: 0"));
        assert!(fill.starts_with("height: 10.00%"));
    }
}
