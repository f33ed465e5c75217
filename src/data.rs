//! Static mock data behind the dashboard

use crate::inbox::InboxItem;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub is_positive: bool,
    pub icon: &'static str,
    /// CSS accent modifier
    pub accent: &'static str,
}

pub const STATS: [StatCard; 4] = [
    StatCard {
        title: "Total Revenue",
        value: "$34,545",
        change: "+12.5%",
        is_positive: true,
        icon: "💰",
        accent: "success",
    },
    StatCard {
        title: "Total Orders",
        value: "1,235",
        change: "+8.3%",
        is_positive: true,
        icon: "🛒",
        accent: "info",
    },
    StatCard {
        title: "Active Users",
        value: "2,543",
        change: "-2.1%",
        is_positive: false,
        icon: "👥",
        accent: "warning",
    },
    StatCard {
        title: "Avg. Order Value",
        value: "$85.20",
        change: "+4.2%",
        is_positive: true,
        icon: "📈",
        accent: "primary",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFigures {
    pub month: &'static str,
    pub sales: u32,
    pub users: u32,
    pub orders: u32,
}

#[rustfmt::skip]
pub const MONTHLY: [MonthlyFigures; 7] = [
    MonthlyFigures { month: "Jan", sales: 4000, users: 2400, orders: 2400 },
    MonthlyFigures { month: "Feb", sales: 3000, users: 1398, orders: 2210 },
    MonthlyFigures { month: "Mar", sales: 2000, users: 9800, orders: 2290 },
    MonthlyFigures { month: "Apr", sales: 2780, users: 3908, orders: 2000 },
    MonthlyFigures { month: "May", sales: 1890, users: 4800, orders: 2181 },
    MonthlyFigures { month: "Jun", sales: 2390, users: 3800, orders: 2500 },
    MonthlyFigures { month: "Jul", sales: 3490, users: 4300, orders: 2100 },
];

/// Largest value across all monthly series, for scaling bars
pub fn monthly_peak() -> u32 {
    MONTHLY
        .iter()
        .flat_map(|m| [m.sales, m.users, m.orders])
        .max()
        .unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusShare {
    pub label: &'static str,
    pub percent: u8,
    pub color: &'static str,
}

#[rustfmt::skip]
pub const ORDER_STATUS_SPLIT: [StatusShare; 3] = [
    StatusShare { label: "Completed", percent: 75, color: "#10b981" },
    StatusShare { label: "Pending", percent: 15, color: "#f59e0b" },
    StatusShare { label: "Cancelled", percent: 10, color: "#ef4444" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Delivered,
    Shipped,
    Processing,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "delivered",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Processing => "processing",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "✔",
            OrderStatus::Shipped => "🚚",
            OrderStatus::Processing => "⏳",
            OrderStatus::Cancelled => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub amount: &'static str,
    pub status: OrderStatus,
}

#[rustfmt::skip]
pub const RECENT_ORDERS: [Order; 5] = [
    Order { id: "#ORD-001", customer: "John Doe", amount: "$125.00", status: OrderStatus::Shipped },
    Order { id: "#ORD-002", customer: "Jane Smith", amount: "$85.50", status: OrderStatus::Processing },
    Order { id: "#ORD-003", customer: "Robert Johnson", amount: "$210.00", status: OrderStatus::Delivered },
    Order { id: "#ORD-004", customer: "Emily Davis", amount: "$42.99", status: OrderStatus::Processing },
    Order { id: "#ORD-005", customer: "Michael Wilson", amount: "$156.75", status: OrderStatus::Delivered },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u32,
    pub sender: String,
    pub content: String,
    pub time: String,
    pub read: bool,
    pub avatar: String,
}

impl InboxItem for Message {
    fn id(&self) -> u32 {
        self.id
    }
    fn is_read(&self) -> bool {
        self.read
    }
    fn mark_read(&mut self) {
        self.read = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Order,
    User,
    Alert,
}

impl NoticeKind {
    pub fn icon(self) -> &'static str {
        match self {
            NoticeKind::Order => "🛒",
            NoticeKind::User => "👤",
            NoticeKind::Alert => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub time: String,
    pub read: bool,
    pub kind: NoticeKind,
}

impl InboxItem for Notice {
    fn id(&self) -> u32 {
        self.id
    }
    fn is_read(&self) -> bool {
        self.read
    }
    fn mark_read(&mut self) {
        self.read = true;
    }
}

#[rustfmt::skip]
pub fn inbox_messages() -> Vec<Message> {
    [
        (1, "John Doe", "Meeting at 3 PM tomorrow", "2 hours ago", false, "JD"),
        (2, "Jane Smith", "Project update: All tasks completed", "5 hours ago", true, "JS"),
        (3, "Team Standup", "Daily standup in 15 minutes", "1 day ago", true, "TS"),
    ]
    .into_iter()
    .map(|(id, sender, content, time, read, avatar)| Message {
        id,
        sender: sender.to_string(),
        content: content.to_string(),
        time: time.to_string(),
        read,
        avatar: avatar.to_string(),
    })
    .collect()
}

#[rustfmt::skip]
pub fn inbox_notifications() -> Vec<Notice> {
    [
        (1, "New order received", "Order #1234 has been placed", "10 min ago", false, NoticeKind::Order),
        (2, "New user registered", "Jane Smith has registered", "2 hours ago", false, NoticeKind::User),
        (3, "Server Alert", "Server load is high", "1 day ago", true, NoticeKind::Alert),
    ]
    .into_iter()
    .map(|(id, title, description, time, read, kind)| Notice {
        id,
        title: title.to_string(),
        description: description.to_string(),
        time: time.to_string(),
        read,
        kind,
    })
    .collect()
}

/// Sidebar entry; `section` is the path segment under `/dashboard`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub text: &'static str,
    pub icon: &'static str,
    pub section: Option<&'static str>,
}

#[rustfmt::skip]
pub const MENU_ITEMS: [MenuItem; 8] = [
    MenuItem { text: "Dashboard", icon: "📊", section: None },
    MenuItem { text: "Users", icon: "👥", section: Some("users") },
    MenuItem { text: "Products", icon: "🛒", section: Some("products") },
    MenuItem { text: "Categories", icon: "🗂", section: Some("categories") },
    MenuItem { text: "Orders", icon: "🧾", section: Some("orders") },
    MenuItem { text: "Inventory", icon: "📦", section: Some("inventory") },
    MenuItem { text: "Reports", icon: "📑", section: Some("reports") },
    MenuItem { text: "Settings", icon: "⚙", section: Some("settings") },
];

/// Title for a `/dashboard/<section>` page
pub fn section_title(section: &str) -> Option<&'static str> {
    MENU_ITEMS
        .iter()
        .find(|item| item.section == Some(section))
        .map(|item| item.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_split_covers_all_orders() {
        let total: u32 = ORDER_STATUS_SPLIT.iter().map(|s| u32::from(s.percent)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn peak_is_march_users() {
        assert_eq!(monthly_peak(), 9800);
    }

    #[test]
    fn sections_resolve_to_menu_titles() {
        assert_eq!(section_title("orders"), Some("Orders"));
        assert_eq!(section_title("billing"), None);
        assert_eq!(MENU_ITEMS.iter().filter(|m| m.section.is_none()).count(), 1);
    }
}
