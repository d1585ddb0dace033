/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.error_message, None;
///     model.success_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    build_url, handle_request_error, map_http_error, parse_json_response, process_json_response,
    BASE_URL,
};

/// Macro for settings GET requests with standard loading state and error handling.
/// Requires domain parameters for event wrapping.
///
/// Sends `Authorization: Bearer <token>` when the model holds a token.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Patterns
///
/// Pattern 1: GET expecting JSON response
/// ```ignore
/// settings_get!(Ota, OtaEvent, model, OTA_SETTINGS_ENDPOINT, LoadResponse, "Load OTA settings",
///     expect_json: OtaSettings
/// )
/// ```
///
/// Pattern 2: GET expecting JSON response, converted with map
/// ```ignore
/// settings_get!(AccessPoint, ApEvent, model, AP_SETTINGS_ENDPOINT, LoadResponse, "Load access point settings",
///     expect_json: DeviceApSettings,
///     map: ApSettings::from
/// )
/// ```
#[macro_export]
macro_rules! settings_get {
    // Pattern 1: GET expecting JSON response
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {{
        $crate::settings_get!($domain, $domain_event, $model, $endpoint, $response_event, $action,
            expect_json: $response_type,
            map: std::convert::identity
        )
    }};

    // Pattern 2: GET expecting JSON response, converted with map
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty, map: $mapper:expr) => {{
        $model.start_loading();
        let builder = $crate::HttpCmd::get($crate::build_url($endpoint));
        let builder = match &$model.auth_token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        };
        crux_core::Command::all([
            crux_core::render::render(),
            builder.build().then_send(|result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result.map($mapper),
                ))
            }),
        ])
    }};
}

/// Macro for settings POST requests with a JSON body, expecting the stored
/// settings back as JSON.
///
/// Sends `Authorization: Bearer <token>` when the model holds a token.
///
/// # Patterns
///
/// Pattern 1: POST with JSON body expecting JSON response
/// ```ignore
/// settings_post!(Ota, OtaEvent, model, OTA_SETTINGS_ENDPOINT, SaveResponse, "Save OTA settings",
///     body_json: &settings,
///     expect_json: OtaSettings
/// )
/// ```
///
/// Both patterns take an optional `on_request_error: |m| { .. }` handler that
/// runs when the request body cannot be built.
///
/// Pattern 2: POST with JSON body expecting JSON response, converted with map
/// ```ignore
/// settings_post!(AccessPoint, ApEvent, model, AP_SETTINGS_ENDPOINT, SaveResponse, "Save access point settings",
///     body_json: &DeviceApSettings::from(&settings),
///     expect_json: DeviceApSettings,
///     map: ApSettings::from
/// )
/// ```
#[macro_export]
macro_rules! settings_post {
    // Pattern 1: POST with JSON body expecting JSON response
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_json: $response_type:ty $(, on_request_error: |$error_model:ident| $error_body:block)? $(,)?) => {{
        $crate::settings_post!($domain, $domain_event, $model, $endpoint, $response_event, $action,
            body_json: $body,
            expect_json: $response_type,
            map: std::convert::identity
            $(, on_request_error: |$error_model| $error_body)?
        )
    }};

    // Pattern 2: POST with JSON body expecting JSON response, converted with map
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_json: $response_type:ty, map: $mapper:expr $(, on_request_error: |$error_model:ident| $error_body:block)? $(,)?) => {{
        $model.start_loading();
        let builder = $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json");
        let builder = match &$model.auth_token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        };
        match builder.body_json($body) {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$domain(
                        $crate::events::$domain_event::$response_event(event_result.map($mapper)),
                    )
                }),
            ]),
            Err(e) => {
                $model.stop_loading();
                $(
                    {
                        let $error_model = &mut *$model;
                        $error_body
                    }
                )?
                $crate::handle_request_error($model, $action, e)
            }
        }
    }};
}

/// Macro for handling response events with standard loading state and error handling.
///
/// # Patterns
///
/// Pattern 1: Custom success handling
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, settings| {
///         m.ota.start_editing(OtaFormData::from(&settings));
///     },
/// })
/// ```
///
/// Pattern 2: Custom success handler + success message
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, settings| {
///         m.ota.start_editing(OtaFormData::from(&settings));
///     },
///     success_message: "OTA settings saved",
/// })
/// ```
///
/// Pattern 3: Custom success and error handlers + success message
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, settings| {
///         m.ota.start_editing(OtaFormData::from(&settings));
///     },
///     on_error: |m| {
///         m.ota.to_editing();
///     },
///     success_message: "OTA settings saved",
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    // Pattern 1: Only custom success handler
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};

    // Pattern 2: Custom success handler + success message
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block,
        success_message: $msg:expr $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                let $success_model = &mut *$model;
                $success_body
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};

    // Pattern 3: Custom success and error handlers + success message
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block,
        on_error: |$error_model:ident| $error_body:block,
        success_message: $msg:expr $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                let $success_model = &mut *$model;
                $success_body
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                let $error_model = &mut *$model;
                $error_body
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::http_helpers::OTA_SETTINGS_ENDPOINT;
    use crate::model::Model;
    use crate::types::{FormState, OtaFormData, OtaSettings};

    #[test]
    fn unencodable_body_returns_form_to_editing() {
        let mut state = Model::default();
        let model = &mut state;
        model.ota.start_editing(OtaFormData::default());
        model.ota.to_submitting();

        // JSON object keys must be strings
        let body: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let _command = crate::settings_post!(Ota, OtaEvent, model, OTA_SETTINGS_ENDPOINT, SaveResponse, "Save OTA settings",
            body_json: &body,
            expect_json: OtaSettings,
            on_request_error: |model| {
                model.ota.to_editing();
            }
        );

        assert_eq!(state.ota.state, FormState::Editing);
        assert!(!state.is_loading);
        assert_eq!(state.pending_requests, 0);
        assert!(state
            .error_message
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to create Save OTA settings request")));
    }
}
