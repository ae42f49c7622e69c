/// Generate accessors for the global reactive signals.
///
/// Usage:
/// `global_signals! {
///     pub dashboard => dashboard: DashboardState,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
