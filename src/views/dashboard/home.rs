//! Dashboard overview - stat cards, monthly figures, order breakdown

use crate::data::{
    monthly_peak, MonthlyFigures, Order, StatCard, MONTHLY, ORDER_STATUS_SPLIT, RECENT_ORDERS,
    STATS,
};
use dioxus::prelude::*;

/// Bar width as a percentage of the largest monthly value
fn bar_width(value: u32, peak: u32) -> String {
    format!("width: {:.1}%;", f64::from(value) * 100.0 / f64::from(peak.max(1)))
}

#[component]
pub fn DashboardHome() -> Element {
    rsx! {
        div { class: "overview",
            h1 { class: "page-title", "Dashboard Overview" }

            div { class: "stat-grid",
                for stat in STATS {
                    StatTile { key: "{stat.title}", stat: stat.clone() }
                }
            }

            div { class: "panel-grid",
                section { class: "panel panel-wide",
                    div { class: "panel-header",
                        h2 { "Monthly Performance" }
                        span { class: "panel-sub", "Jan – Jul" }
                    }
                    MonthlyTable { rows: MONTHLY.to_vec() }
                }

                section { class: "panel",
                    h2 { "Order Status" }
                    div { class: "split-bar",
                        for share in ORDER_STATUS_SPLIT {
                            div {
                                key: "{share.label}",
                                class: "split-segment",
                                style: "width: {share.percent}%; background: {share.color};",
                                title: "{share.label} {share.percent}%",
                            }
                        }
                    }
                    ul { class: "legend",
                        for share in ORDER_STATUS_SPLIT {
                            li { key: "{share.label}",
                                span { class: "legend-dot", style: "background: {share.color};" }
                                "{share.label} {share.percent}%"
                            }
                        }
                    }
                }

                section { class: "panel panel-wide",
                    div { class: "panel-header",
                        h2 { "Recent Orders" }
                        span { class: "panel-sub", {format!("{} orders", RECENT_ORDERS.len())} }
                    }
                    RecentOrders { orders: RECENT_ORDERS.to_vec() }
                }
            }
        }
    }
}

#[component]
fn StatTile(stat: StatCard) -> Element {
    rsx! {
        div { class: "panel stat stat-{stat.accent}",
            div { class: "stat-body",
                div {
                    div { class: "stat-title", "{stat.title}" }
                    div { class: "stat-value", "{stat.value}" }
                }
                div { class: "stat-icon", "{stat.icon}" }
            }
            div { class: if stat.is_positive { "stat-change up" } else { "stat-change down" },
                if stat.is_positive { "▲ " } else { "▼ " }
                "{stat.change}"
                span { class: "panel-sub", " vs last month" }
            }
        }
    }
}

#[component]
fn MonthlyTable(rows: Vec<MonthlyFigures>) -> Element {
    let peak = monthly_peak();

    rsx! {
        table { class: "figures",
            thead {
                tr {
                    th { "Month" }
                    th { "Sales" }
                    th { "Users" }
                    th { "Orders" }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.month}",
                        td { "{row.month}" }
                        for (value, series) in [(row.sales, "sales"), (row.users, "users"), (row.orders, "orders")] {
                            td { key: "{series}",
                                div { class: "bar-cell",
                                    div { class: "bar bar-{series}", style: bar_width(value, peak) }
                                    span { "{value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentOrders(orders: Vec<Order>) -> Element {
    rsx! {
        ul { class: "orders",
            for order in orders {
                li { key: "{order.id}", class: "order-row",
                    span { class: "order-status-icon", {order.status.icon()} }
                    div { class: "order-main",
                        div { class: "order-id", "{order.id}" }
                        div { class: "panel-sub", "{order.customer}" }
                    }
                    span { class: format!("status-pill status-{}", order.status.label()), {order.status.label()} }
                    span { class: "order-amount", "{order.amount}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_peak() {
        assert_eq!(bar_width(9800, 9800), "width: 100.0%;");
        assert_eq!(bar_width(4900, 9800), "width: 50.0%;");
        assert_eq!(bar_width(0, 0), "width: 0.0%;");
    }
}
