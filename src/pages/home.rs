//! Home Page
//!
//! Dashboard overview: stat cards, quick-access links, activity timeline,
//! and research highlights. All content is fixture data.

use leptos::*;
use leptos_router::*;

use crate::components::PageShell;

/// Home dashboard page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <PageShell
            active="home"
            title="Marine Research Dashboard"
            subtitle="Your personalized hub for ocean biodiversity research"
        >
            <div class="space-y-10">
                // Stats row
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <StatCard number="127" label="Active Datasets" trend="12% this month" />
                    <StatCard number="43" label="Species Identified" trend="8 new species" />
                    <StatCard number="89.4%" label="AI Accuracy" trend="2.1% improvement" />
                    <StatCard number="24" label="Collaborators" trend="Global network" />
                </div>

                // Quick access
                <section>
                    <SectionHeader title="Quick Access" blurb="Jump into your most-used research tools" />
                    <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        <QuickAccessCard
                            icon="📊"
                            title="Analytics Dashboard"
                            description="View data visualizations and insights"
                            path="/analytics"
                        />
                        <QuickAccessCard
                            icon="🔬"
                            title="Research Projects"
                            description="Manage your ongoing studies"
                            path="/research"
                        />
                        <QuickAccessCard
                            icon="🗄️"
                            title="Data Repository"
                            description="Access and upload datasets"
                            path="/data-hub"
                        />
                        <QuickAccessCard
                            icon="🐠"
                            title="Species Classifier"
                            description="AI-powered species identification"
                            path="/features"
                        />
                    </div>
                </section>

                // Activity timeline
                <section>
                    <SectionHeader title="Recent Activity" blurb="Your latest research updates" />
                    <div class="space-y-3">
                        {ACTIVITY.iter().map(|(icon, heading, detail, when)| view! {
                            <div class="flex items-start space-x-4 bg-blue-900/40 border border-blue-800 rounded-xl p-4">
                                <span class="text-2xl">{*icon}</span>
                                <div>
                                    <h4 class="font-medium">{*heading}</h4>
                                    <p class="text-sm text-blue-200">{*detail}</p>
                                    <p class="text-xs text-blue-400 mt-1">{*when}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </section>

                // Highlights
                <section>
                    <SectionHeader title="Research Highlights" blurb="Discover trending research and insights" />
                    <div class="grid md:grid-cols-2 gap-4">
                        <div class="relative bg-blue-900/40 border border-cyan-600 rounded-xl p-6">
                            <span class="absolute -top-3 left-4 text-xs font-bold bg-cyan-600 px-2 py-1 rounded-full">
                                "Featured"
                            </span>
                            <h3 class="font-semibold text-lg mt-1">"Ocean Acidification Impact Study"</h3>
                            <p class="text-sm text-blue-200 mt-2">
                                "New research reveals significant impact on coral reef ecosystems across the Indo-Pacific region."
                            </p>
                            <div class="flex flex-wrap gap-3 text-xs text-blue-300 mt-4">
                                <span>"🌊 15 Locations"</span>
                                <span>"📊 500+ Samples"</span>
                                <span>"👥 8 Researchers"</span>
                            </div>
                        </div>
                        <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-6">
                            <h3 class="font-semibold text-lg">"AI-Driven Species Discovery"</h3>
                            <p class="text-sm text-blue-200 mt-2">
                                "Machine learning algorithms identified 12 new marine species from deep-sea exploration data."
                            </p>
                            <div class="flex flex-wrap gap-3 text-xs text-blue-300 mt-4">
                                <span>"🤖 94% Accuracy"</span>
                                <span>"🐠 12 New Species"</span>
                            </div>
                        </div>
                    </div>
                </section>
            </div>
        </PageShell>
    }
}

static ACTIVITY: [(&str, &str, &str, &str); 4] = [
    (
        "📊",
        "Completed coral reef biodiversity analysis",
        "Analyzed 234 species across 12 reef sites",
        "2 hours ago",
    ),
    (
        "🌊",
        "Uploaded ocean temperature dataset",
        "Temperature data from 15 monitoring buoys",
        "1 day ago",
    ),
    (
        "🧬",
        "DNA sequencing results received",
        "Results for 45 marine samples processed",
        "3 days ago",
    ),
    (
        "🤖",
        "AI model training completed",
        "Species classification accuracy improved to 94.2%",
        "1 week ago",
    ),
];

/// Section heading with a short blurb.
#[component]
fn SectionHeader(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="mb-4">
            <h2 class="text-xl font-semibold">{title}</h2>
            <p class="text-sm text-blue-300">{blurb}</p>
        </div>
    }
}

/// Headline number with a trend line.
#[component]
fn StatCard(number: &'static str, label: &'static str, trend: &'static str) -> impl IntoView {
    view! {
        <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5">
            <div class="text-3xl font-bold text-cyan-300">{number}</div>
            <div class="text-sm text-blue-200 mt-1">{label}</div>
            <div class="text-xs text-green-400 mt-2">"↗ " {trend}</div>
        </div>
    }
}

/// Navigating shortcut card.
#[component]
fn QuickAccessCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    path: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=path
            class="group block bg-blue-900/40 border border-blue-800 rounded-xl p-5 hover:border-cyan-500 transition-colors"
        >
            <div class="text-3xl">{icon}</div>
            <h3 class="font-semibold mt-2">{title}</h3>
            <p class="text-sm text-blue-200 mt-1">{description}</p>
            <div class="text-cyan-400 mt-3 group-hover:translate-x-1 transition-transform">"→"</div>
        </A>
    }
}
