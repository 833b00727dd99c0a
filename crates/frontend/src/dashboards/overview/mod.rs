//! Контрольная панель: ключевые показатели, тренд расходов и список задач.

use crate::shared::components::StatCard;
use leptos::prelude::*;

/// Расходы по месяцам для столбчатой диаграммы.
const MONTHLY_SPEND: [(&str, f64); 7] = [
    ("1月", 2400.0),
    ("2月", 1398.0),
    ("3月", 9800.0),
    ("4月", 3908.0),
    ("5月", 4800.0),
    ("6月", 3800.0),
    ("7月", 4300.0),
];

struct TodoItem {
    text: &'static str,
    kind: &'static str,
    date: &'static str,
}

const TODO_ITEMS: [TodoItem; 4] = [
    TodoItem { text: "审批 办公家具 采购申请", kind: "approval", date: "10分钟前" },
    TodoItem { text: "更新 联想电脑 供应商合同", kind: "contract", date: "2小时前" },
    TodoItem { text: "库存预警：打印纸不足 50 包", kind: "inventory", date: "4小时前" },
    TodoItem { text: "确认 顺丰快递 订单状态", kind: "shipping", date: "昨天" },
];

#[component]
pub fn DashboardView() -> impl IntoView {
    let max_spend = MONTHLY_SPEND
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::MIN, f64::max);

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <h2 class="dashboard__title">"数据总览"</h2>
                <p class="dashboard__subtitle">"欢迎回来，这是您当前的采购系统运行状态。"</p>
            </div>

            <div class="dashboard__stats">
                <StatCard
                    label="总采购支出".to_string()
                    icon_name="arrow-up".to_string()
                    value="¥1,284,500".to_string()
                    trend="+12.5% 较上月"
                    trend_direction="up"
                />
                <StatCard
                    label="待处理申请".to_string()
                    icon_name="clipboard".to_string()
                    value="24".to_string()
                    trend="-8.2% 较上月"
                    trend_direction="down"
                />
                <StatCard
                    label="已完成订单".to_string()
                    icon_name="check-circle".to_string()
                    value="482".to_string()
                    trend="+24.1% 较上月"
                    trend_direction="up"
                />
                <StatCard
                    label="库存预警".to_string()
                    icon_name="alert".to_string()
                    value="5".to_string()
                    trend="-2.4% 较上月"
                    trend_direction="down"
                />
            </div>

            <div class="dashboard__panels">
                <div class="dashboard__chart panel">
                    <div class="panel__header">
                        <h3 class="panel__title">"采购支出趋势"</h3>
                        <select class="select select--sm">
                            <option>"最近 6 个月"</option>
                            <option>"最近 12 个月"</option>
                        </select>
                    </div>
                    <div class="spend-chart">
                        {MONTHLY_SPEND
                            .iter()
                            .map(|&(month, spend)| {
                                let height = (spend / max_spend * 100.0).round();
                                view! {
                                    <div class="spend-chart__col">
                                        <div
                                            class="spend-chart__bar"
                                            style=format!("height: {height}%")
                                            title=format!("¥{spend:.0}")
                                        ></div>
                                        <div class="spend-chart__label">{month}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="dashboard__todo panel">
                    <h3 class="panel__title">"待办任务"</h3>
                    <div class="todo-list">
                        {TODO_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="todo-list__item">
                                        <div class=format!(
                                            "todo-list__marker todo-list__marker--{}",
                                            item.kind,
                                        )></div>
                                        <div>
                                            <p class="todo-list__text">{item.text}</p>
                                            <p class="todo-list__date">{item.date}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="todo-list__more">"查看全部任务"</button>
                </div>
            </div>
        </div>
    }
}
