use super::*;

fn column_style(column: &MatrixColumn) -> String {
    format!(
        "left:{}px;animation-duration:{:.2}s;opacity:{:.2};",
        column.left_px, column.duration_s, column.opacity
    )
}

#[component]
/// Full-viewport falling-glyph overlay. Replaced wholesale when a new generation starts.
pub(super) fn MatrixOverlayLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let overlay = create_memo(move |_| runtime.state.get().overlay);

    move || {
        overlay.get().map(|overlay| {
            view! {
                <div id="neoContainer" class="neo-container" aria-hidden="true" data-generation=overlay.generation>
                    {overlay
                        .columns
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="neo-column" style=column_style(column)>
                                    {column
                                        .glyphs
                                        .iter()
                                        .map(|glyph| view! { <span>{glyph.to_string()}</span><br /> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}
