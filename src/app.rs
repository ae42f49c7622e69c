use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;

use crate::{
    application::{ChartLoader, Poller, PollingHandle, ScanUseCase},
    config::AppConfig,
    domain::{
        dashboard::DashboardState,
        logging::{LogComponent, get_logger},
        market_data::Pair,
    },
    global_state::dashboard,
    infrastructure::{DashboardHttpClient, rendering::LineChartRenderer},
    presentation::{
        ChartBody, HeaderStatusModel, NO_CHART_DATA_MESSAGE, NO_SIGNALS_MESSAGE, NewsItemModel,
        SignalCardModel, health_class, show_no_signals_hint,
    },
    time_utils::{format_hour_minute, format_timestamp},
};

const CHART_WIDTH: u32 = 760;
const CHART_HEIGHT: u32 = 380;

/// 📡 Root component: wires the HTTP client into the use cases and owns the poll timer
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = dashboard();
    let api = Rc::new(DashboardHttpClient::from_config(&config));
    let poller = Poller::new(Rc::clone(&api));
    let scan = ScanUseCase::new(Rc::clone(&api), config.scan_refresh_delay());
    let charts = ChartLoader::new(api, config.chart_history_limit);

    // The first tick runs synchronously up to its first await, so the
    // refresh flag is already set when the grid first renders.
    let polling = PollingHandle::start(config.poll_interval(), {
        let poller = poller.clone();
        move || {
            let cycle = poller.start_refresh(store);
            async move {
                cycle.await;
            }
        }
    });
    let spawner = polling.spawner();
    on_cleanup(move || drop(polling));

    let on_refresh = {
        let spawner = spawner.clone();
        Callback::new(move |_: ()| {
            let cycle = poller.start_refresh(store);
            spawner.spawn(async move {
                cycle.await;
            });
        })
    };

    let on_scan = {
        let spawner = spawner.clone();
        Callback::new(move |_: ()| {
            get_logger().info(LogComponent::Presentation("App"), "⚡ Manual scan requested");
            let scan = scan.clone();
            spawner.spawn(async move {
                scan.run(&store).await;
            });
        })
    };

    let on_select = {
        let charts = charts.clone();
        Callback::new(move |pair: Pair| {
            let charts = charts.clone();
            spawner.spawn(async move {
                charts.open(&store, pair).await;
            });
        })
    };

    let on_close = Callback::new(move |_: ()| charts.close(&store));

    view! {
        <style>
            {r#"
            .dashboard {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #0f1724;
                min-height: 100vh;
                color: #e6edf7;
                padding: 20px;
                box-sizing: border-box;
            }

            .header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 12px 20px;
                background: #16213a;
                border-radius: 12px;
                margin-bottom: 20px;
            }

            .header h1 {
                margin: 0;
                font-size: 22px;
            }

            .header-controls {
                display: flex;
                gap: 10px;
                align-items: center;
            }

            .health {
                padding: 4px 10px;
                border-radius: 999px;
                font-size: 12px;
                font-weight: 600;
                letter-spacing: 0.5px;
            }

            .health--ok { background: rgba(46, 204, 113, 0.15); color: #2ecc71; }
            .health--bad { background: rgba(231, 76, 60, 0.15); color: #e74c3c; }

            .btn {
                border: none;
                border-radius: 8px;
                padding: 8px 14px;
                cursor: pointer;
                font-weight: 600;
                color: #e6edf7;
                background: #24324f;
            }

            .btn--primary { background: #3867d6; }
            .btn--ghost { background: transparent; font-size: 18px; }
            .btn--refresh.spinning { animation: spin 1s linear infinite; }

            .layout {
                display: grid;
                grid-template-columns: 3fr 1fr;
                gap: 20px;
            }

            .signal-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 14px;
            }

            .signal-card {
                background: #16213a;
                border-radius: 12px;
                padding: 14px;
                cursor: pointer;
                border-left: 4px solid #7f8c8d;
                transition: transform 0.15s;
            }

            .signal-card:hover { transform: translateY(-2px); }
            .signal-card--buy { border-left-color: #2ecc71; }
            .signal-card--sell { border-left-color: #e74c3c; }

            .signal-card__header {
                display: flex;
                justify-content: space-between;
                margin-bottom: 10px;
                font-weight: 700;
            }

            .signal-badge {
                padding: 2px 8px;
                border-radius: 6px;
                font-size: 12px;
                background: #34495e;
            }

            .signal-badge--buy { background: #2ecc71; color: #0f1724; }
            .signal-badge--sell { background: #e74c3c; }

            .row {
                display: flex;
                justify-content: space-between;
                font-size: 13px;
                margin: 4px 0;
            }

            .label { color: #8a9bb8; }
            .value--bad { color: #e74c3c; }
            .value--good { color: #2ecc71; }
            .confidence--high { color: #f1c40f; font-weight: 700; }

            .reason { font-size: 12px; color: #b8c4d9; }
            .time { font-size: 11px; color: #6c7a93; }

            .placeholder {
                text-align: center;
                color: #6c7a93;
                padding: 40px;
            }

            .news-list {
                list-style: none;
                padding: 0;
                margin: 0;
            }

            .news-item {
                display: flex;
                gap: 10px;
                padding: 10px 0;
                border-bottom: 1px solid #24324f;
            }

            .news-title { font-size: 13px; }
            .news-meta { font-size: 11px; color: #6c7a93; }

            .sentiment-dot {
                width: 8px;
                height: 8px;
                margin-top: 5px;
                border-radius: 50%;
                flex-shrink: 0;
                background: #7f8c8d;
            }

            .sentiment-dot--positive { background: #2ecc71; }
            .sentiment-dot--negative { background: #e74c3c; }

            .modal-backdrop {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.6);
                display: flex;
                align-items: center;
                justify-content: center;
            }

            .modal {
                background: #16213a;
                border-radius: 12px;
                padding: 16px;
                min-width: 800px;
            }

            .modal__header {
                display: flex;
                justify-content: space-between;
                align-items: center;
            }

            .modal__body {
                min-height: 380px;
                display: flex;
                align-items: center;
                justify-content: center;
            }

            .spinner {
                width: 36px;
                height: 36px;
                border: 4px solid #24324f;
                border-top-color: #3867d6;
                border-radius: 50%;
                animation: spin 1s linear infinite;
            }

            @keyframes spin {
                to { transform: rotate(360deg); }
            }
            "#}
        </style>
        <div class="dashboard">
            <Header on_scan=on_scan on_refresh=on_refresh />
            <main class="layout">
                <SignalGrid on_select=on_select />
                <NewsFeed />
            </main>
            <ChartModal limit=config.chart_history_limit on_close=on_close />
        </div>
    }
}

/// 🩺 Title bar with backend health and the manual controls
#[component]
fn Header(on_scan: Callback<()>, on_refresh: Callback<()>) -> impl IntoView {
    let store = dashboard();
    let status = create_memo(move |_| store.with(|state| HeaderStatusModel::from(state.status())));
    let refreshing = create_memo(move |_| store.with(DashboardState::is_refreshing));

    view! {
        <header class="header">
            <h1>"📡 Signal Dashboard"</h1>
            <div class="header-controls">
                <span class=move || health_class(status.with(|s| s.status_ok))>
                    {move || status.with(|s| s.status_text.clone())}
                </span>
                <span class=move || health_class(status.with(|s| s.database_ok))>
                    "DB: " {move || status.with(|s| s.database_label)}
                </span>
                <button class="btn btn--primary" on:click=move |_| on_scan.call(())>
                    "⚡ Scan Now"
                </button>
                <button
                    class=move || if refreshing.get() { "btn btn--refresh spinning" } else { "btn btn--refresh" }
                    title="Refresh"
                    on:click=move |_| on_refresh.call(())
                >
                    "⟳"
                </button>
            </div>
        </header>
    }
}

/// 📊 Grid of signal cards, or the empty hint
#[component]
fn SignalGrid(on_select: Callback<Pair>) -> impl IntoView {
    let store = dashboard();
    let cards = create_memo(move |_| {
        store.with(|state| state.signals().iter().map(SignalCardModel::from).collect::<Vec<_>>())
    });
    let show_hint = create_memo(move |_| store.with(show_no_signals_hint));

    view! {
        <section class="signals">
            <h2>"Active Signals"</h2>
            <Show
                when=move || !show_hint.get()
                fallback=|| view! { <div class="placeholder">{NO_SIGNALS_MESSAGE}</div> }
            >
                <div class="signal-grid">
                    {move || {
                        cards
                            .get()
                            .into_iter()
                            .map(|card| view! { <SignalCard card=card on_select=on_select /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}

#[component]
fn SignalCard(card: SignalCardModel, on_select: Callback<Pair>) -> impl IntoView {
    let pair = card.pair.clone();
    let time = format_timestamp(&card.time);
    let risk_levels = card.risk_levels.clone().map(|(stop_loss, take_profit)| {
        view! {
            <div class="row">
                <span class="label">"Stop Loss"</span>
                <span class="value value--bad">{stop_loss}</span>
            </div>
            <div class="row">
                <span class="label">"Take Profit"</span>
                <span class="value value--good">{take_profit}</span>
            </div>
        }
    });

    view! {
        <div class=card.variant.card_class() on:click=move |_| on_select.call(pair.clone())>
            <div class="signal-card__header">
                <span class="pair">{card.pair.to_string()}</span>
                <span class=card.variant.badge_class()>{card.label.clone()}</span>
            </div>
            <div class="row">
                <span class="label">"Entry"</span>
                <span class="value">{card.entry_price.clone()}</span>
            </div>
            {risk_levels}
            <div class="row">
                <span class="label">"Confidence"</span>
                <span class=card.confidence_class()>{card.confidence.clone()}</span>
            </div>
            <p class="reason">{card.reason.clone()}</p>
            <div class="time">{time}</div>
        </div>
    }
}

/// 📰 Headlines with a sentiment dot each
#[component]
fn NewsFeed() -> impl IntoView {
    let store = dashboard();
    let items = create_memo(move |_| {
        store.with(|state| state.news().iter().map(NewsItemModel::from).collect::<Vec<_>>())
    });

    view! {
        <aside class="news">
            <h2>"📰 Market News"</h2>
            <ul class="news-list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let time = format_hour_minute(&item.date);
                            view! {
                                <li class="news-item">
                                    <span class=item.dot_class></span>
                                    <div>
                                        <div class="news-title">{item.title}</div>
                                        <div class="news-meta">{item.source} " • " {time}</div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

/// 🪟 Price history of the selected pair
#[component]
fn ChartModal(limit: usize, on_close: Callback<()>) -> impl IntoView {
    let store = dashboard();
    let body = create_memo(move |_| store.with(|state| ChartBody::from(state.chart())));
    let pair = create_memo(move |_| store.with(|state| state.chart().selected_pair().cloned()));
    let title = move || {
        pair.get()
            .map(|pair| format!("{} Price History (Last {} Candles - 15m)", pair, limit))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || body.get() != ChartBody::Hidden>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h3>{title}</h3>
                        <button class="btn btn--ghost" on:click=move |_| on_close.call(())>
                            "✕"
                        </button>
                    </div>
                    <div class="modal__body">
                        {move || match body.get() {
                            ChartBody::Spinner => view! { <div class="spinner"></div> }.into_view(),
                            ChartBody::Plot => view! { <PriceChart /> }.into_view(),
                            ChartBody::NoData => {
                                view! { <div class="placeholder">{NO_CHART_DATA_MESSAGE}</div> }.into_view()
                            }
                            ChartBody::Hidden => ().into_view(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// 📈 Canvas line chart, redrawn when the loaded series changes
#[component]
fn PriceChart() -> impl IntoView {
    let store = dashboard();
    let points = create_memo(move |_| store.with(|state| state.chart().points().to_vec()));
    let canvas_ref = create_node_ref::<Canvas>();
    let renderer = LineChartRenderer::new(CHART_WIDTH, CHART_HEIGHT);

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        points.with(|points| {
            if let Err(e) = renderer.render(&canvas, points) {
                get_logger().error(
                    LogComponent::Presentation("PriceChart"),
                    &format!("❌ Chart render failed: {}", e),
                );
            }
        });
    });

    view! { <canvas class="price-chart" node_ref=canvas_ref /> }
}
