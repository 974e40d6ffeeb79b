//! Unit modal fragments.
//!
//! Each response renders the whole modal body for one state. Forms marked
//! `data-modal-form` and buttons marked `data-modal-get` are swapped in place
//! by the client script; the unit id travels in the URL and the pending
//! mobile or draft in the form.

use leptos::prelude::*;

use bayport_app::domain::{
    geometry::UnitId,
    modal::{ModalState, ModalTag, UnitDraft},
    units::{Unit, UnitType},
};

fn modal_url(unit: UnitId, action: &str) -> String {
    format!("/units/{unit}/modal/{action}")
}

fn tag_url(unit: UnitId, tag: ModalTag) -> String {
    modal_url(unit, tag.as_str())
}

/// The modal body for `unit` in `state`.
pub(crate) fn modal_fragment(unit: Unit, state: ModalState) -> String {
    let tag = state.tag();
    let back = tag.back().map(|target| {
        let url = tag_url(unit.id, target);

        view! {
            <button type="button" class="umd-back-btn" data-modal-get=url>
                "← Back"
            </button>
        }
    });

    super::render(move || {
        let id = unit.id;
        let number = unit.unit_number.clone();

        let content = match state {
            ModalState::View => view_panel(unit).into_any(),
            ModalState::Login { error } => login_form(id, number, error).into_any(),
            ModalState::SetPassword { mobile, error } => {
                set_password_form(id, mobile.to_string(), error).into_any()
            }
            ModalState::Password { mobile, error } => {
                password_form(id, number, mobile.to_string(), error).into_any()
            }
            ModalState::Edit {
                draft,
                error,
                notice,
            } => edit_form(id, number, draft, error, notice).into_any(),
        };

        view! {
            <div class="umd-body" data-state={tag.as_str()}>
                {back}
                {content}
            </div>
        }
    })
}

#[component]
fn FormError(error: Option<String>) -> impl IntoView {
    view! { <div class="umd-form-error" role="alert">{error}</div> }
}

fn detail_row(label: &'static str, value: Option<String>, class: &'static str) -> impl IntoView {
    value.map(|value| {
        view! {
            <div class="umd-row">
                <span class="umd-label">{label}</span>
                <span class=class>{value}</span>
            </div>
        }
    })
}

fn view_panel(unit: Unit) -> impl IntoView {
    let rent_row = detail_row("Asking Rent", unit.rent_label(), "umd-value umd-price");
    let owner_row = detail_row(
        "Owner",
        unit.owner_label().map(str::to_string),
        "umd-value",
    );

    let Unit {
        id,
        unit_number,
        status,
        unit_type,
        photos,
        video,
        has_tenant,
        ..
    } = unit;

    let badge_class = format!("umd-badge {}", status.as_str());
    let type_row = detail_row(
        "Type",
        unit_type.map(|kind| kind.label().to_string()),
        "umd-value",
    );

    let photos = (!photos.is_empty()).then(|| {
        view! {
            <div class="umd-section-title">"Photos"</div>
            <div class="umd-photos">
                {photos
                    .into_iter()
                    .enumerate()
                    .map(|(position, url)| {
                        let alt = format!("Photo {}", position + 1);

                        view! {
                            <img
                                src={url.clone()}
                                alt=alt
                                loading="lazy"
                                data-lightbox-photo=url
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let video = video.map(|url| {
        view! {
            <div class="umd-section-title">"Video"</div>
            <div class="umd-video">
                <video
                    src={url.clone()}
                    controls=true
                    preload="metadata"
                    data-lightbox-video=url
                ></video>
            </div>
        }
    });

    let login = has_tenant.then(|| {
        let url = tag_url(id, ModalTag::Login);

        view! {
            <button type="button" class="umd-edit-btn" data-modal-get=url>
                "Login to Edit"
            </button>
        }
    });

    view! {
        <div class="umd-header">
            <div class="umd-unit-num">{format!("Unit {unit_number}")}</div>
            <span class=badge_class>{status.label()}</span>
        </div>
        <div class="umd-details">{type_row}{rent_row}{owner_row}</div>
        {photos}
        {video}
        {login}
    }
}

fn login_form(id: UnitId, unit_number: String, error: Option<String>) -> impl IntoView {
    let action = modal_url(id, "mobile");

    view! {
        <div class="umd-form-title">{format!("Login to edit Unit {unit_number}")}</div>
        <p class="umd-form-sub">"Enter the mobile number registered for this unit."</p>
        <form method="post" action=action data-modal-form="">
            <div class="umd-form-group">
                <label class="umd-field-label" for="f-mobile">"Mobile Number"</label>
                <input
                    type="tel"
                    id="f-mobile"
                    name="mobile"
                    class="umd-input"
                    placeholder="e.g. 501-555-1001"
                    autocomplete="tel"
                />
            </div>
            <FormError error=error />
            <button type="submit" class="umd-submit-btn">"Continue →"</button>
        </form>
    }
}

fn set_password_form(id: UnitId, mobile: String, error: Option<String>) -> impl IntoView {
    let action = modal_url(id, "set-password");

    view! {
        <div class="umd-form-title">"Create your password"</div>
        <p class="umd-form-sub">
            "First time logging in. Set a secure password for your account."
        </p>
        <form method="post" action=action data-modal-form="">
            <input type="hidden" name="mobile" value=mobile />
            <div class="umd-form-group">
                <label class="umd-field-label" for="f-pw1">"New Password"</label>
                <input
                    type="password"
                    id="f-pw1"
                    name="password"
                    class="umd-input"
                    placeholder="At least 6 characters"
                    autocomplete="new-password"
                />
            </div>
            <div class="umd-form-group">
                <label class="umd-field-label" for="f-pw2">"Confirm Password"</label>
                <input
                    type="password"
                    id="f-pw2"
                    name="confirm"
                    class="umd-input"
                    placeholder="Repeat password"
                    autocomplete="new-password"
                />
            </div>
            <FormError error=error />
            <button type="submit" class="umd-submit-btn">"Set Password"</button>
        </form>
    }
}

fn password_form(
    id: UnitId,
    unit_number: String,
    mobile: String,
    error: Option<String>,
) -> impl IntoView {
    let action = modal_url(id, "password");

    view! {
        <div class="umd-form-title">"Welcome back"</div>
        <p class="umd-form-sub">
            {format!("Enter your password to edit Unit {unit_number}.")}
        </p>
        <form method="post" action=action data-modal-form="">
            <input type="hidden" name="mobile" value=mobile />
            <div class="umd-form-group">
                <label class="umd-field-label" for="f-pw">"Password"</label>
                <input
                    type="password"
                    id="f-pw"
                    name="password"
                    class="umd-input"
                    placeholder="Your password"
                    autocomplete="current-password"
                />
            </div>
            <FormError error=error />
            <button type="submit" class="umd-submit-btn">"Login"</button>
        </form>
    }
}

fn photo_row(url: String) -> impl IntoView {
    view! {
        <div class="umd-photo-row">
            <img src={url.clone()} class="umd-photo-thumb" alt="" />
            <input type="url" class="umd-input umd-photo-input" name="photos" value=url readonly=true />
            <button type="button" class="umd-remove-photo" data-remove-row="" title="Remove">
                "✕"
            </button>
        </div>
    }
}

fn type_options(selected: UnitType) -> impl IntoView {
    UnitType::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <option value={kind.label()} selected={kind == selected}>
                    {kind.label()}
                </option>
            }
        })
        .collect_view()
}

fn edit_form(
    id: UnitId,
    unit_number: String,
    draft: UnitDraft,
    error: Option<String>,
    notice: Option<String>,
) -> impl IntoView {
    let save_url = modal_url(id, "save");
    let logout_url = modal_url(id, "logout");
    let view_url = tag_url(id, ModalTag::View);
    let photos_url = format!("/units/{id}/photos");
    let video_url = format!("/units/{id}/video");
    let video_value = draft.video.clone().unwrap_or_default();

    let video_preview = draft.video.map(|url| {
        view! {
            <div class="umd-video-row">
                <video src=url class="umd-video-thumb" muted=true></video>
                <span class="umd-video-name">"Current video"</span>
                <button type="button" class="umd-remove-photo" data-remove-video="" title="Remove">
                    "✕"
                </button>
            </div>
        }
    });

    view! {
        <div class="umd-edit-header">
            <div class="umd-unit-num">{format!("Edit Unit {unit_number}")}</div>
            <form method="post" action=logout_url data-modal-form="">
                <button type="submit" class="umd-logout-btn">"Logout"</button>
            </form>
        </div>
        <form method="post" action=save_url enctype="multipart/form-data" data-modal-form="">
            <div class="umd-form-group">
                <label class="umd-field-label" for="e-owner">"Owner Name"</label>
                <input
                    type="text"
                    id="e-owner"
                    name="owner"
                    class="umd-input"
                    value=draft.owner
                    placeholder="Your full name"
                />
            </div>
            <div class="umd-form-group">
                <label class="umd-field-label" for="e-rent">"Asking Rent (₱/month)"</label>
                <input
                    type="number"
                    id="e-rent"
                    name="rent"
                    class="umd-input"
                    value=draft.rent
                    placeholder="e.g. 2500"
                    min="0"
                    step="1"
                />
            </div>
            <div class="umd-form-group">
                <label class="umd-field-label" for="e-type">"Unit Type"</label>
                <select id="e-type" name="unit_type" class="umd-input umd-select">
                    {type_options(draft.unit_type)}
                </select>
            </div>
            <div class="umd-form-group">
                <span class="umd-field-label">"Photos"</span>
                <div id="e-photos">{draft.photos.into_iter().map(photo_row).collect_view()}</div>
                <label class="umd-upload-label" for="e-photo-file">
                    <span class="umd-upload-icon">"⇧"</span>
                    " Upload Photos"
                    <input
                        type="file"
                        id="e-photo-file"
                        name="files"
                        accept="image/*"
                        multiple=true
                        hidden=true
                        data-upload-url=photos_url
                    />
                </label>
            </div>
            <div class="umd-form-group">
                <span class="umd-field-label">
                    "Video " <span class="umd-field-hint">"(optional, max 100 MB)"</span>
                </span>
                <input type="hidden" id="e-video" name="video" value=video_value />
                <div id="e-video-preview">{video_preview}</div>
                <label class="umd-upload-label" for="e-video-file">
                    <span class="umd-upload-icon">"▶"</span>
                    " Upload Video"
                    <input
                        type="file"
                        id="e-video-file"
                        name="file"
                        accept="video/mp4,video/webm,video/quicktime"
                        hidden=true
                        data-upload-url=video_url
                    />
                </label>
            </div>
            <div class="umd-upload-progress" role="status">{notice}</div>
            <FormError error=error />
            <div class="umd-form-actions">
                <button type="button" class="umd-cancel-btn" data-modal-get=view_url>
                    "Cancel"
                </button>
                <button type="submit" class="umd-save-btn">"Save Changes"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use bayport_app::domain::{
        geometry::{UnitId, UnitStatus},
        mobile::Mobile,
    };

    use super::*;

    fn unit() -> Unit {
        Unit {
            id: UnitId(7),
            unit_number: "201".to_string(),
            status: UnitStatus::Available,
            owner: None,
            rent_price: None,
            unit_type: None,
            photos: Vec::new(),
            video: None,
            has_tenant: false,
        }
    }

    #[test]
    fn view_without_details_shows_badge_only() {
        let html = modal_fragment(unit(), ModalState::View);

        assert!(html.contains("Unit 201"));
        assert!(html.contains("Available"));
        assert!(!html.contains("Asking Rent"));
        assert!(!html.contains("Owner"));
        assert!(!html.contains("Login to Edit"));
    }

    #[test]
    fn view_with_tenant_offers_login() {
        let html = modal_fragment(
            Unit {
                has_tenant: true,
                ..unit()
            },
            ModalState::View,
        );

        assert!(html.contains("Login to Edit"));
        assert!(html.contains("data-modal-get=\"/units/7/modal/login\""));
    }

    #[test]
    fn view_shows_set_details() {
        let html = modal_fragment(
            Unit {
                owner: Some("Jane Doe".to_string()),
                rent_price: Some(2500),
                unit_type: Some(UnitType::Studio),
                photos: vec!["https://cdn.example/p1.jpg".to_string()],
                ..unit()
            },
            ModalState::View,
        );

        assert!(html.contains("Jane Doe"));
        assert!(html.contains("₱2,500/mo"));
        assert!(html.contains("Studio"));
        assert!(html.contains("data-lightbox-photo=\"https://cdn.example/p1.jpg\""));
    }

    #[test]
    fn login_error_and_back_button_render() {
        let html = modal_fragment(
            unit(),
            ModalState::Login {
                error: Some("This number is not registered for this unit.".to_string()),
            },
        );

        assert!(html.contains("This number is not registered for this unit."));
        assert!(html.contains("data-modal-get=\"/units/7/modal/view\""));
        assert!(html.contains("action=\"/units/7/modal/mobile\""));
    }

    #[test]
    fn password_states_carry_the_pending_mobile() {
        let html = modal_fragment(
            unit(),
            ModalState::SetPassword {
                mobile: Mobile::normalize("501-555-1001"),
                error: None,
            },
        );

        assert!(html.contains("value=\"5015551001\""));
        assert!(html.contains("action=\"/units/7/modal/set-password\""));
        assert!(html.contains("data-modal-get=\"/units/7/modal/login\""));
    }

    #[test]
    fn edit_form_round_trips_the_draft() {
        let draft = UnitDraft {
            owner: "Jane \"JD\" Doe".to_string(),
            rent: "2500".to_string(),
            unit_type: UnitType::Penthouse,
            photos: vec!["https://cdn.example/p1.jpg".to_string()],
            video: Some("https://cdn.example/v.mp4".to_string()),
        };

        let html = modal_fragment(
            unit(),
            ModalState::Edit {
                draft,
                error: None,
                notice: Some("1 photo(s) uploaded successfully.".to_string()),
            },
        );

        assert!(html.contains("Jane &quot;JD&quot; Doe"));
        assert!(html.contains("value=\"2500\""));
        assert!(html.contains("name=\"photos\""));
        assert!(html.contains("value=\"https://cdn.example/v.mp4\""));
        assert!(html.contains("1 photo(s) uploaded successfully."));
        assert!(html.contains("data-upload-url=\"/units/7/photos\""));
        assert!(!html.contains("umd-back-btn"));
    }
}
