/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
/// Renders only if a value actually changed.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.success_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.success_message, None;
///     model.login_form.error, None
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
        $crate::update_field!($model_field, $value;)
    }};
}
