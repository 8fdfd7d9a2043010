//! Data Hub Page
//!
//! Dataset catalog with access levels, data stats, and connected sources.

use leptos::*;

use crate::components::PageShell;

struct Dataset {
    name: &'static str,
    size: &'static str,
    kind: &'static str,
    last_modified: &'static str,
    access: &'static str,
}

static DATASETS: [Dataset; 4] = [
    Dataset {
        name: "Indo-Pacific Coral Species Database",
        size: "245 MB",
        kind: "biological",
        last_modified: "2 hours ago",
        access: "public",
    },
    Dataset {
        name: "Ocean Temperature Monitoring 2024",
        size: "892 MB",
        kind: "oceanographic",
        last_modified: "1 day ago",
        access: "restricted",
    },
    Dataset {
        name: "Deep Sea eDNA Sequences",
        size: "1.2 GB",
        kind: "genetic",
        last_modified: "3 days ago",
        access: "private",
    },
    Dataset {
        name: "Marine Biodiversity Index",
        size: "156 MB",
        kind: "analytical",
        last_modified: "1 week ago",
        access: "public",
    },
];

static DATA_STATS: [(&str, &str); 4] = [
    ("1.2TB", "Total Data"),
    ("47", "Datasets"),
    ("23", "Sources"),
    ("156", "Collaborators"),
];

static SOURCES: [(&str, &str, &str, &str); 3] = [
    (
        "🛰️",
        "Satellite Monitoring",
        "Real-time ocean surface temperature and chlorophyll data",
        "Active",
    ),
    (
        "⚓",
        "Ocean Buoys Network",
        "24/7 monitoring from 45 deep-sea monitoring stations",
        "Active",
    ),
    (
        "🔬",
        "Laboratory Systems",
        "Automated integration with lab instruments and databases",
        "Pending",
    ),
];

fn dataset_icon(kind: &str) -> &'static str {
    match kind {
        "oceanographic" => "🌊",
        "biological" => "🐠",
        "genetic" => "🧬",
        _ => "📊",
    }
}

/// Data Hub page component
#[component]
pub fn DataHub() -> impl IntoView {
    view! {
        <PageShell
            active="data-hub"
            title="Data Hub"
            subtitle="Centralized marine data management and sharing platform"
        >
            <div class="space-y-10">
                // Actions
                <div class="flex flex-wrap gap-3">
                    <button class="px-4 py-2 bg-cyan-600 hover:bg-cyan-500 rounded-lg font-medium transition-colors">
                        "📤 Upload Dataset"
                    </button>
                    <button class="px-4 py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors">
                        "🔗 Connect Data Source"
                    </button>
                    <button class="px-4 py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors">
                        "📋 Import from CSV"
                    </button>
                </div>

                // Stats row
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {DATA_STATS.iter().map(|(number, label)| view! {
                        <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5 text-center">
                            <div class="text-2xl font-bold text-cyan-300">{*number}</div>
                            <div class="text-sm text-blue-200 mt-1">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>

                // Dataset catalog
                <section>
                    <h2 class="text-xl font-semibold mb-4">"Recent Datasets"</h2>
                    <div class="grid md:grid-cols-2 gap-4">
                        {DATASETS.iter().map(|dataset| view! { <DatasetCard dataset=dataset /> }).collect_view()}
                    </div>
                </section>

                // Connected sources
                <section>
                    <h2 class="text-xl font-semibold mb-4">"Connected Data Sources"</h2>
                    <div class="grid md:grid-cols-3 gap-4">
                        {SOURCES.iter().map(|(icon, name, blurb, status)| view! {
                            <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5">
                                <div class="text-3xl">{*icon}</div>
                                <h3 class="font-semibold mt-2">{*name}</h3>
                                <p class="text-sm text-blue-200 mt-1">{*blurb}</p>
                                <span class=if *status == "Active" {
                                    "inline-block mt-3 text-xs font-bold bg-green-600/80 px-2 py-1 rounded-full"
                                } else {
                                    "inline-block mt-3 text-xs font-bold bg-amber-500/80 px-2 py-1 rounded-full"
                                }>
                                    {*status}
                                </span>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            </div>
        </PageShell>
    }
}

/// Dataset entry with kind icon and access badge.
#[component]
fn DatasetCard(dataset: &'static Dataset) -> impl IntoView {
    let access_class = match dataset.access {
        "public" => "text-green-400",
        "restricted" => "text-amber-400",
        _ => "text-red-400",
    };

    view! {
        <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5">
            <div class="flex items-start space-x-4">
                <div class="text-3xl">{dataset_icon(dataset.kind)}</div>
                <div class="min-w-0">
                    <h3 class="font-semibold truncate">{dataset.name}</h3>
                    <p class="text-sm text-blue-300 mt-1">
                        {dataset.size}
                        " • "
                        {dataset.kind}
                        " • "
                        <span class=access_class>{dataset.access}</span>
                    </p>
                </div>
            </div>

            <div class="flex gap-2 mt-4">
                <button class="px-3 py-1.5 bg-cyan-600 hover:bg-cyan-500 rounded-lg text-sm font-medium transition-colors">
                    "View"
                </button>
                <button class="px-3 py-1.5 bg-blue-800 hover:bg-blue-700 rounded-lg text-sm font-medium transition-colors">
                    "Download"
                </button>
                <button class="px-3 py-1.5 bg-blue-800 hover:bg-blue-700 rounded-lg text-sm font-medium transition-colors">
                    "Share"
                </button>
            </div>

            <p class="text-xs text-blue-400 mt-3">{format!("Last modified: {}", dataset.last_modified)}</p>
        </div>
    }
}
