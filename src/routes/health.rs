use crate::app_lib::GIT_COMMIT_HASH;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-slate-200 bg-white">
                    <div class="border-b border-slate-200 px-6 py-3 font-semibold text-slate-600">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center text-base text-slate-900">{GIT_COMMIT_HASH}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
