//! Features Page
//!
//! Showcase of the platform's research toolkit, including a couple of
//! not-yet-available entries.

use leptos::*;
use leptos_router::*;

use crate::components::PageShell;

struct Showcase {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: [&'static str; 4],
    /// None marks a Coming Soon entry with no Try Now link
    try_path: Option<&'static str>,
}

static SHOWCASES: [Showcase; 6] = [
    Showcase {
        icon: "🐠",
        title: "AI Species Classification",
        description: "Advanced machine learning for marine species identification",
        details: [
            "Real-time image recognition with 94% accuracy",
            "Support for 2,000+ marine species",
            "Morphometric analysis integration",
            "Batch processing capabilities",
        ],
        try_path: Some("/analytics"),
    },
    Showcase {
        icon: "🌊",
        title: "Ocean Analytics Engine",
        description: "Comprehensive environmental data analysis platform",
        details: [
            "Multi-parameter correlation analysis",
            "Climate change impact modeling",
            "Real-time sensor data integration",
            "Predictive ecosystem modeling",
        ],
        try_path: Some("/analytics"),
    },
    Showcase {
        icon: "🧬",
        title: "Molecular Data Hub",
        description: "Complete genomic and eDNA analysis suite",
        details: [
            "Automated DNA sequence alignment",
            "Phylogenetic tree construction",
            "eDNA metabarcoding pipeline",
            "Population genetics analysis",
        ],
        try_path: Some("/data-hub"),
    },
    Showcase {
        icon: "📊",
        title: "Interactive Visualizations",
        description: "Dynamic charts, maps, and 3D models for data exploration",
        details: [
            "Real-time dashboard updates",
            "Geographic information systems",
            "3D ecosystem modeling",
            "Custom report generation",
        ],
        try_path: Some("/analytics"),
    },
    Showcase {
        icon: "🤖",
        title: "Predictive AI Models",
        description: "Next-generation forecasting for marine ecosystems",
        details: [
            "Biodiversity change prediction",
            "Species migration modeling",
            "Ecosystem health forecasting",
            "Climate impact simulation",
        ],
        try_path: None,
    },
    Showcase {
        icon: "☁️",
        title: "Cloud Computing Platform",
        description: "Scalable infrastructure for large-scale marine research",
        details: [
            "High-performance computing clusters",
            "Automated data processing pipelines",
            "Global data synchronization",
            "Jupyter notebook environments",
        ],
        try_path: None,
    },
];

/// Features page component
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <PageShell
            active="features"
            title="Platform Features"
            subtitle="Explore our comprehensive marine research toolkit"
        >
            <div class="grid md:grid-cols-2 gap-6">
                {SHOWCASES.iter().map(|showcase| view! {
                    <div class=if showcase.try_path.is_some() {
                        "bg-blue-900/40 border border-blue-800 rounded-xl p-6"
                    } else {
                        "bg-blue-900/20 border border-blue-800/60 rounded-xl p-6 opacity-80"
                    }>
                        <div class="flex items-start space-x-4">
                            <div class="text-4xl">{showcase.icon}</div>
                            <div>
                                <h3 class="font-semibold text-lg">
                                    {showcase.title}
                                    {showcase.try_path.is_none().then(|| view! {
                                        <span class="ml-2 text-xs font-bold bg-amber-500/80 text-white px-2 py-0.5 rounded-full align-middle">
                                            "Coming Soon"
                                        </span>
                                    })}
                                </h3>
                                <p class="text-sm text-blue-200 mt-1">{showcase.description}</p>
                            </div>
                        </div>

                        <ul class="list-disc list-inside text-sm text-blue-200 mt-4 space-y-1">
                            {showcase.details.iter().map(|detail| view! { <li>{*detail}</li> }).collect_view()}
                        </ul>

                        {showcase.try_path.map(|path| view! {
                            <A
                                href=path
                                class="inline-block mt-4 px-4 py-2 bg-cyan-600 hover:bg-cyan-500 rounded-lg text-sm font-medium transition-colors"
                            >
                                "Try Now →"
                            </A>
                        })}
                    </div>
                }).collect_view()}
            </div>
        </PageShell>
    }
}
