//! Dashboard page listing placement and company records.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It loads both record lists on mount, supports
//! a department filter for company data, and coordinates add/delete flows
//! through modal dialogs.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::client::ApiClient;
use crate::net::types::PlacementRecord;
use crate::state::dashboard::DashboardState;

/// Which record list a delete request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RecordKind {
    Placement,
    Company,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let department_filter = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<(RecordKind, String)>);

    let reload = move || {
        dashboard.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let filters = company_filters(&department_filter.get_untracked());
            leptos::task::spawn_local(async move {
                let api = client.get_value();
                let placements = crate::net::dashboard::fetch_placement_data(&api).await;
                let companies =
                    crate::net::dashboard::fetch_company_data(&api, &filters).await;
                // Best-effort; a 401 here also triggers the login redirect.
                let profile = crate::net::user::profile(&api).await.ok();
                dashboard.update(|s| {
                    s.loading = false;
                    s.profile = profile;
                    match (placements, companies) {
                        (Ok(placements), Ok(companies)) => {
                            s.placements = placements;
                            s.companies = companies;
                        }
                        (Err(err), _) | (_, Err(err)) => {
                            log::error!("dashboard load failed: {err}");
                            s.error = Some(err.to_string());
                        }
                    }
                });
            });
        }
    };

    // Initial load, once.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        reload();
    });

    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |_| {
        let Some((kind, id)) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let api = client.get_value();
                let params = [("id", id)];
                let result = match kind {
                    RecordKind::Placement => {
                        crate::net::dashboard::delete_placement_record(&api, &params).await
                    }
                    RecordKind::Company => {
                        crate::net::dashboard::delete_company_record(&api, &params).await
                    }
                };
                if let Err(err) = result {
                    log::error!("delete failed: {err}");
                    dashboard.update(|s| s.error = Some(err.to_string()));
                }
                reload();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, id);
        }
    });

    let on_add_cancel = Callback::new(move |_| show_add.set(false));

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Placement Records"</span>
                <button class="btn toolbar__add" on:click=move |_| show_add.set(true)>
                    "+ Add Record"
                </button>
                <span class="toolbar__spacer"></span>
                <input
                    class="toolbar__filter"
                    type="text"
                    placeholder="Filter companies by department"
                    prop:value=move || department_filter.get()
                    on:input=move |ev| department_filter.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            reload();
                        }
                    }
                />
                <button class="btn toolbar__apply" on:click=move |_| reload()>
                    "Apply"
                </button>
                <span class="toolbar__self">
                    {move || {
                        dashboard
                            .get()
                            .profile
                            .map(|p| p.username)
                            .unwrap_or_default()
                    }}
                </span>
            </header>

            <Show when=move || dashboard.get().error.is_some()>
                <p class="dashboard-page__error">
                    {move || dashboard.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !dashboard.get().loading
                fallback=move || view! { <p>"Loading records..."</p> }
            >
                <section class="dashboard-page__section">
                    <h2>"Placements"</h2>
                    <table class="records-table">
                        <thead>
                            <tr>
                                <th>"Student"</th>
                                <th>"Department"</th>
                                <th>"Company"</th>
                                <th>"Role"</th>
                                <th>"Package"</th>
                                <th>"Year"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                dashboard
                                    .get()
                                    .placements
                                    .into_iter()
                                    .map(|record| {
                                        let id = record.id.clone();
                                        view! {
                                            <tr>
                                                <td>{record.student_name}</td>
                                                <td>{record.department}</td>
                                                <td>{record.company}</td>
                                                <td>{record.role}</td>
                                                <td>{format!("{:.1} LPA", record.package_lpa)}</td>
                                                <td>{record.year}</td>
                                                <td>
                                                    {id
                                                        .map(|id| {
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| {
                                                                        delete_target
                                                                            .set(Some((RecordKind::Placement, id.clone())));
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            }
                                                        })}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="dashboard-page__section">
                    <h2>"Companies"</h2>
                    <table class="records-table">
                        <thead>
                            <tr>
                                <th>"Company"</th>
                                <th>"Department"</th>
                                <th>"Offers"</th>
                                <th>"Avg package"</th>
                                <th>"Year"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                dashboard
                                    .get()
                                    .companies
                                    .into_iter()
                                    .map(|record| {
                                        let id = record.id.clone();
                                        view! {
                                            <tr>
                                                <td>{record.name}</td>
                                                <td>{record.department}</td>
                                                <td>{record.offers}</td>
                                                <td>{format!("{:.1} LPA", record.avg_package_lpa)}</td>
                                                <td>{record.year}</td>
                                                <td>
                                                    {id
                                                        .map(|id| {
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| {
                                                                        delete_target
                                                                            .set(Some((RecordKind::Company, id.clone())));
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            }
                                                        })}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>
            </Show>

            <Show when=move || show_add.get()>
                <AddPlacementDialog on_cancel=on_add_cancel on_saved=Callback::new(move |_| reload())/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteRecordDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </div>
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn company_filters(department: &str) -> Vec<(&'static str, String)> {
    let department = department.trim();
    if department.is_empty() {
        Vec::new()
    } else {
        vec![("department", department.to_owned())]
    }
}

/// Modal dialog for creating a placement record.
#[component]
fn AddPlacementDialog(on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());

    let student_name = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let package_lpa = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        if busy.get_untracked() {
            return;
        }
        let record = PlacementRecord {
            id: None,
            student_name: student_name.get_untracked().trim().to_owned(),
            department: department.get_untracked().trim().to_owned(),
            company: company.get_untracked().trim().to_owned(),
            role: role.get_untracked().trim().to_owned(),
            package_lpa: package_lpa.get_untracked().trim().parse().unwrap_or(0.0),
            year: year.get_untracked().trim().parse().unwrap_or(0),
        };
        if record.student_name.is_empty() || record.company.is_empty() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result =
                    crate::net::dashboard::add_placement_record(&client.get_value(), &record)
                        .await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        on_cancel.run(());
                        on_saved.run(());
                    }
                    Err(err) => log::error!("add record failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (record, client);
        }
    });

    let text_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Placement Record"</h2>
                {text_field("Student Name", student_name)}
                {text_field("Department", department)}
                {text_field("Company", company)}
                {text_field("Role", role)}
                {text_field("Package (LPA)", package_lpa)}
                {text_field("Year", year)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting a record.
#[component]
fn DeleteRecordDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Record"</h2>
                <p class="dialog__danger">"This will permanently delete this record."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
