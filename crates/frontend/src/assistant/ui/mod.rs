//! Экран "AI 决策助手": авто-рекомендации и чат с консультантом.

use crate::assistant::api;
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::shared::icons::icon;
use contracts::domain::purchase_order::PurchaseStatus;
use contracts::shared::assistant::{ChatRole, ChatTurn, Impact, Insight, CHAT_UNAVAILABLE};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Сводка по текущим данным, уходящая в промпт рекомендаций.
fn data_context_summary(ctx: AppGlobalContext) -> String {
    let orders = ctx.purchase_orders.get_untracked();
    let spend: f64 = orders
        .list()
        .iter()
        .map(|o| contracts::shared::list::grand_total(&o.items))
        .sum();
    let pending = ctx
        .requisitions
        .get_untracked()
        .list()
        .iter()
        .filter(|r| r.status == PurchaseStatus::Pending)
        .count();
    let suppliers = ctx.suppliers.get_untracked().len();
    format!(
        "Recent spend: ¥{:.0}, Open purchase orders: {}, Pending requisitions: {}, Active suppliers: {}",
        spend,
        orders.len(),
        pending,
        suppliers
    )
}

#[component]
pub fn AssistantView() -> impl IntoView {
    let ctx = use_app_context();
    // None = идёт загрузка (скелетоны)
    let insights: RwSignal<Option<Vec<Insight>>> = RwSignal::new(None);
    // Счётчик поколений: ответ устаревшего запроса молча отбрасывается.
    let insight_generation = RwSignal::new(0u64);

    let load_insights = move || {
        let generation = insight_generation.get_untracked() + 1;
        insight_generation.set(generation);
        insights.set(None);
        let context = data_context_summary(ctx);
        spawn_local(async move {
            let result = api::fetch_insights(&context).await;
            if insight_generation.get_untracked() == generation {
                insights.set(Some(result));
            }
        });
    };

    Effect::new(move |_| {
        load_insights();
    });

    view! {
        <div class="assistant">
            <div class="assistant__header">
                <div>
                    <h2 class="assistant__title">{icon("sparkles")}" AI 决策助手"</h2>
                    <p class="assistant__subtitle">"利用生成式 AI 优化您的采购流程并发现潜在的节省空间。"</p>
                </div>
                <button class="assistant__refresh" on:click=move |_| load_insights()>
                    {icon("refresh")}
                    " 重新分析"
                </button>
            </div>

            <div class="assistant__grid">
                <InsightsPanel insights=insights.read_only() />
                <ChatPanel />
            </div>
        </div>
    }
}

#[component]
fn InsightsPanel(insights: ReadSignal<Option<Vec<Insight>>>) -> impl IntoView {
    view! {
        <section class="insights">
            <h3 class="insights__heading">"智能建议"</h3>
            {move || match insights.get() {
                None => view! {
                    <div class="insights__skeletons">
                        <div class="insights__skeleton"></div>
                        <div class="insights__skeleton"></div>
                        <div class="insights__skeleton"></div>
                    </div>
                }.into_any(),
                Some(items) => view! {
                    <div class="insights__cards">
                        {items.into_iter().map(|insight| {
                            let impact_class = match insight.impact {
                                Impact::High => "insight-card__impact insight-card__impact--high",
                                Impact::Medium => "insight-card__impact insight-card__impact--medium",
                                Impact::Low => "insight-card__impact insight-card__impact--low",
                                Impact::NA => "insight-card__impact insight-card__impact--na",
                            };
                            view! {
                                <div class="insight-card">
                                    <div class="insight-card__head">
                                        <h4 class="insight-card__title">{insight.title}</h4>
                                        <span class=impact_class>
                                            {format!("影响力: {}", insight.impact.label())}
                                        </span>
                                    </div>
                                    <p class="insight-card__description">{insight.description}</p>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ChatPanel() -> impl IntoView {
    let history: RwSignal<Vec<ChatTurn>> = RwSignal::new(Vec::new());
    let draft = RwSignal::new(String::new());
    let is_typing = RwSignal::new(false);
    let request_generation = RwSignal::new(0u64);

    let send = move || {
        let message = draft.get_untracked().trim().to_string();
        if message.is_empty() || is_typing.get_untracked() {
            return;
        }
        draft.set(String::new());

        // Оптимистично показываем реплику пользователя сразу.
        let prior = history.get_untracked();
        history.update(|h| {
            h.push(ChatTurn {
                role: ChatRole::User,
                content: message.clone(),
            })
        });
        is_typing.set(true);

        let generation = request_generation.get_untracked() + 1;
        request_generation.set(generation);

        spawn_local(async move {
            let reply = match api::send_chat(&prior, &message).await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("chat request failed: {}", e);
                    CHAT_UNAVAILABLE.to_string()
                }
            };
            // Ответ более нового запроса уже применён — этот устарел.
            if request_generation.get_untracked() != generation {
                return;
            }
            history.update(|h| {
                h.push(ChatTurn {
                    role: ChatRole::Assistant,
                    content: reply,
                })
            });
            is_typing.set(false);
        });
    };

    view! {
        <section class="chat">
            <div class="chat__header">
                <div class="chat__avatar">{icon("sparkles")}</div>
                <div>
                    <h3 class="chat__title">"采购顾问 Chat"</h3>
                    <p class="chat__status">"在线"</p>
                </div>
            </div>

            <div class="chat__messages">
                <Show when=move || history.get().is_empty() && !is_typing.get()>
                    <div class="chat__empty">
                        <p>
                            "我是您的 AI 采购顾问。您可以问我："<br/>
                            "“哪家办公用品供应商的评价最好？”"<br/>
                            "“分析一下上个季度的成本支出”"
                        </p>
                    </div>
                </Show>
                <For
                    each={move || history.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(i, _)| *i
                    children=move |(_, turn)| {
                        let bubble_class = match turn.role {
                            ChatRole::User => "chat__bubble chat__bubble--user",
                            ChatRole::Assistant => "chat__bubble chat__bubble--assistant",
                        };
                        view! { <div class=bubble_class>{turn.content}</div> }
                    }
                />
                <Show when=move || is_typing.get()>
                    <div class="chat__bubble chat__bubble--assistant chat__bubble--typing">
                        "AI 正在思考..."
                    </div>
                </Show>
            </div>

            <div class="chat__composer">
                <input
                    class="chat__input"
                    type="text"
                    placeholder="在此输入您的问题..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button
                    class="chat__send"
                    disabled=move || is_typing.get()
                    on:click=move |_| send()
                >
                    {icon("send")}
                </button>
            </div>
        </section>
    }
}
