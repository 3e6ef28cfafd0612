//! Card rendering one company's insight data.

use leptos::prelude::*;

use crate::net::types::CompanyInsights;

#[component]
pub fn InsightCard(insights: CompanyInsights) -> impl IntoView {
    let CompanyInsights {
        company_name,
        total_offers,
        avg_package_lpa,
        highest_package_lpa,
        roles,
        summary,
    } = insights;
    let roles_text = roles.join(", ");
    let has_roles = !roles_text.is_empty();

    view! {
        <div class="insight-card">
            <h3 class="insight-card__name">{company_name}</h3>
            <dl class="insight-card__stats">
                <dt>"Total offers"</dt>
                <dd>{total_offers}</dd>
                <dt>"Average package"</dt>
                <dd>{format!("{avg_package_lpa:.1} LPA")}</dd>
                <dt>"Highest package"</dt>
                <dd>{format!("{highest_package_lpa:.1} LPA")}</dd>
            </dl>
            <Show when=move || has_roles>
                <p class="insight-card__roles">{roles_text.clone()}</p>
            </Show>
            {summary.map(|text| view! { <p class="insight-card__summary">{text}</p> })}
        </div>
    }
}
