use chrono::Utc;
use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::platform::{
    count_up_done, counter_elapsed, MetricKind, Metric, METRICS, TRUST_BADGES,
};
use crate::dom;

const SECTION_ID: &str = "platform-metrics";
const FRAME_MS: u32 = 50;

#[function_component(MetricsSection)]
pub fn metrics_section() -> Html {
    let _ = use_window_scroll();
    let started = use_state_eq(|| None::<i64>);
    let now = use_state_eq(|| 0i64);

    // Counters start the first time the section scrolls into view.
    {
        let started = started.clone();
        let now = now.clone();
        use_effect(move || {
            if started.is_none() {
                let visible = dom::element_rect(SECTION_ID)
                    .map(|(top, _)| top < dom::viewport_height())
                    .unwrap_or(false);
                if visible {
                    let ts = Utc::now().timestamp_millis();
                    debug!("Metrics in view, starting counters");
                    started.set(Some(ts));
                    now.set(ts);
                }
            }
            || ()
        });
    }

    let total = started
        .map(|start| (*now - start) as f64)
        .unwrap_or(0.0);
    let animating = started.is_some() && !count_up_done(total, METRICS.len());

    {
        let now = now.clone();
        use_interval(
            move || now.set(Utc::now().timestamp_millis()),
            if animating { FRAME_MS } else { 0 },
        );
    }

    html! {
        <section id={SECTION_ID} class="metrics">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-pill">{"📊 Platform Metrics"}</span>
                    <h2>{"Numbers That "}<span class="accent">{"Speak for Themselves"}</span></h2>
                    <p>{"Real metrics from our growing community of workers, businesses, and investors building India's most trusted gig platform."}</p>
                </div>

                <div class="metrics-grid">
                    { for METRICS.iter().enumerate().map(|(i, metric)| {
                        let animated = if started.is_some() {
                            metric.value_at(counter_elapsed(total, i))
                        } else {
                            0
                        };
                        html! {
                            <div class={classes!("metric-card", format!("metric-{}", metric.accent))}>
                                <div class="metric-head">
                                    <span class="metric-icon">{metric.icon}</span>
                                    <span class="metric-label">{metric.label}</span>
                                </div>
                                <div class="metric-value">{metric.format(animated)}</div>
                                <p class="metric-description">{metric.description}</p>
                                if metric.kind == MetricKind::Rating {
                                    <div class="metric-stars">
                                        { for (0..5).map(|star| html! {
                                            <span class={classes!("star", (star < Metric::stars(animated)).then(|| "filled"))}>{"★"}</span>
                                        }) }
                                    </div>
                                }
                                if let Some(width) = metric.bar_width(animated) {
                                    <div class="metric-bar">
                                        <div class="metric-bar-fill" style={format!("width: {:.0}%", width)}></div>
                                    </div>
                                }
                            </div>
                        }
                    }) }
                </div>

                <div class="trust-badges">
                    { for TRUST_BADGES.iter().map(|(icon, title, detail)| html! {
                        <div class="trust-badge">
                            <span class="trust-badge-icon">{*icon}</span>
                            <strong>{*title}</strong>
                            <span>{*detail}</span>
                        </div>
                    }) }
                </div>

                <p class="metrics-live"><span class="live-dot"></span>{"Live metrics updated in real-time"}</p>
            </div>
            <style>
                {r#"
                    .metrics {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #eff6ff, #f0fdfa);
                    }

                    .metrics-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .metric-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: white;
                        border-top: 4px solid #2563eb;
                    }

                    .metric-success { border-top-color: #059669; }
                    .metric-warning { border-top-color: #f59e0b; }
                    .metric-secondary { border-top-color: #14b8a6; }
                    .metric-accent { border-top-color: #8b5cf6; }

                    .metric-head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #6b7280;
                    }

                    .metric-icon {
                        font-size: 1.5rem;
                    }

                    .metric-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin: 0.75rem 0 0.25rem;
                        font-variant-numeric: tabular-nums;
                    }

                    .metric-description {
                        margin: 0;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    .metric-stars .star {
                        color: #e5e7eb;
                    }

                    .metric-stars .star.filled {
                        color: #f59e0b;
                    }

                    .metric-bar {
                        margin-top: 0.75rem;
                        height: 0.375rem;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        overflow: hidden;
                    }

                    .metric-bar-fill {
                        height: 100%;
                        background: #2563eb;
                    }

                    .trust-badges {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                    }

                    .trust-badge {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.7);
                        font-size: 0.875rem;
                    }

                    .trust-badge-icon {
                        font-size: 1.5rem;
                    }

                    .metrics-live {
                        margin-top: 2rem;
                        text-align: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }

                    .live-dot {
                        display: inline-block;
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-right: 0.5rem;
                        border-radius: 9999px;
                        background: #10b981;
                    }

                    @media (max-width: 768px) {
                        .metrics-grid,
                        .trust-badges {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
