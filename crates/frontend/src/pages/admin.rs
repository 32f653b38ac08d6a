//! Admin dashboard: read-only aggregate view across agents, customers,
//! and properties.

use estate_types::{
    customer_booking_totals, format_date, properties_by_city, AgentPropertyCount, AgentStats,
    CustomerStats, Property,
};
use futures::join;
use yew::prelude::*;

use crate::api;
use crate::components::{Loading, StatCard};

/// Admin dashboard page component.
#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let agents = use_state(Vec::<AgentStats>::new);
    let properties = use_state(Vec::<Property>::new);
    let customers = use_state(Vec::<CustomerStats>::new);
    let agent_counts = use_state(Vec::<AgentPropertyCount>::new);
    let loading = use_state(|| true);

    {
        let agents = agents.clone();
        let properties = properties.clone();
        let customers = customers.clone();
        let agent_counts = agent_counts.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Four independent reads, issued concurrently.
                let (agents_res, properties_res, customers_res, counts_res) = join!(
                    api::get_json::<Vec<AgentStats>>("/admin/agents-stats"),
                    api::get_json::<Vec<Property>>("/admin/properties"),
                    api::get_json::<Vec<CustomerStats>>("/admin/customers"),
                    api::get_json::<Vec<AgentPropertyCount>>("/admin/agent-property-count"),
                );

                match agents_res {
                    Ok(data) => agents.set(data),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch agent stats: {err}").into(),
                    ),
                }
                match properties_res {
                    Ok(data) => properties.set(data),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch properties: {err}").into(),
                    ),
                }
                match customers_res {
                    Ok(data) => customers.set(data),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch customers: {err}").into(),
                    ),
                }
                match counts_res {
                    Ok(mut data) => {
                        data.truncate(10);
                        agent_counts.set(data);
                    }
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch agent property counts: {err}").into(),
                    ),
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    let by_city = properties_by_city(&properties);
    let totals = customer_booking_totals(&customers);
    let max_city_count = by_city.iter().map(|r| r.count).max().unwrap_or(0).max(1);
    let max_agent_count = agent_counts
        .iter()
        .map(|r| r.total_properties)
        .max()
        .unwrap_or(0)
        .max(1);

    html! {
        <div class="admin-dashboard">
            <h2>{"Welcome, Admin"}</h2>

            <div class="stats-grid">
                <StatCard value={agents.len().to_string()} label={"Total Agents"} />
                <StatCard value={properties.len().to_string()} label={"Total Properties"} />
                <StatCard value={customers.len().to_string()} label={"Total Customers"} />
                <StatCard value={totals.accepted.to_string()} label={"Accepted Bookings"} />
                <StatCard value={totals.rejected.to_string()} label={"Rejected Bookings"} />
            </div>

            <div class="charts-grid">
                <div class="card">
                    <div class="card-header">
                        <h4 class="card-title">{"Properties by City"}</h4>
                    </div>
                    { for by_city.iter().map(|row| {
                        breakdown_row(&row.city, row.count, max_city_count)
                    })}
                </div>

                <div class="card">
                    <div class="card-header">
                        <h4 class="card-title">{"Agents by Properties"}</h4>
                    </div>
                    { for agent_counts.iter().map(|row| {
                        breakdown_row(&row.name, row.total_properties as usize, max_agent_count as usize)
                    })}
                </div>
            </div>

            <section>
                <h3 class="section-title">{"Agents List"}</h3>
                <div class="table-wrapper">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Joined"}</th>
                                <th>{"Status"}</th>
                                <th>{"# Bookings"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for agents.iter().map(|agent| html! {
                                <tr key={agent.id.clone()}>
                                    <td>{ &agent.name }</td>
                                    <td>{ &agent.email }</td>
                                    <td>{ joined_display(agent.created_at.as_deref()) }</td>
                                    <td>{ status_badge(agent.is_active) }</td>
                                    <td>{ agent.total_bookings }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </section>

            <section>
                <h3 class="section-title">{"Customers List"}</h3>
                <div class="table-wrapper">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Joined"}</th>
                                <th>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for customers.iter().map(|customer| html! {
                                <tr key={customer.id.clone()}>
                                    <td>{ &customer.name }</td>
                                    <td>{ &customer.email }</td>
                                    <td>{ joined_display(customer.created_at.as_deref()) }</td>
                                    <td>{ status_badge(customer.is_active) }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </section>

            <section>
                <h3 class="section-title">{"Properties List"}</h3>
                <div class="table-wrapper">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>{"Title"}</th>
                                <th>{"Location"}</th>
                                <th>{"Price"}</th>
                                <th>{"Posted By"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for properties.iter().map(|property| html! {
                                <tr key={property.id.clone()}>
                                    <td>{ &property.title }</td>
                                    <td>{ &property.location }</td>
                                    <td>{ format!("₹{}", property.price) }</td>
                                    <td>{ property.agent_name() }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}

/// A labeled count with a bar scaled against the largest count in the
/// breakdown.
fn breakdown_row(label: &str, count: usize, max: usize) -> Html {
    let percentage = (count as f64 / max as f64) * 100.0;

    html! {
        <div class="breakdown-row">
            <div class="breakdown-labels">
                <span>{ label }</span>
                <span>{ count }</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-bar-fill"
                    style={format!("width: {percentage:.0}%")}
                />
            </div>
        </div>
    }
}

fn joined_display(created_at: Option<&str>) -> String {
    created_at.map_or_else(|| "-".to_string(), format_date)
}

fn status_badge(is_active: bool) -> Html {
    let (class, label) = if is_active {
        ("status-badge status-active", "Active")
    } else {
        ("status-badge status-inactive", "Inactive")
    };
    html! { <span class={class}>{ label }</span> }
}
