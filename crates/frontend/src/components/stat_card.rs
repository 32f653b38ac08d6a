//! Summary card for the dashboard stat grids.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
}

/// A single value/label summary card.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-value">{ &props.value }</div>
            <div class="stat-label">{ &props.label }</div>
        </div>
    }
}
