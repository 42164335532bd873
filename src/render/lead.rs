use leptos::prelude::*;

/// Form target. Lives outside `/catalogo/` so it never shadows a product id.
pub const LEAD_FORM_PATH: &str = "/lead";

/// Catalog download form. Posts to [`LEAD_FORM_PATH`].
#[component]
pub fn LeadForm(#[prop(default = false)] submitted: bool) -> impl IntoView {
    if submitted {
        return view! {
            <div class="lead" id="lead">
                <h3 class="lead-title lead-success">"ACCESO CONCEDIDO"</h3>
                <p>"El catálogo exclusivo 2026 ha sido enviado a tu correo."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="lead" id="lead">
            <h3 class="lead-title">"OBTÉN NUESTRO CATÁLOGO 2026"</h3>
            <form class="lead-form" method="post" action=LEAD_FORM_PATH>
                <div class="input-group">
                    <input class="lead-input" type="text" name="name" placeholder="Nombre" required="required" />
                    <input class="lead-input" type="email" name="email" placeholder="Email Corporativo" required="required" />
                    <input class="lead-input" type="text" name="company" placeholder="Empresa" />
                </div>
                <button class="lead-submit" type="submit">"SOLICITAR ACCESO AL CATÁLOGO"</button>
            </form>
            <div class="lead-footer-trend">"TENDENCIA 2026 • ECOMOVING PREMIUM • CATÁLOGO ESTRATÉGICO"</div>
        </div>
    }
    .into_any()
}
