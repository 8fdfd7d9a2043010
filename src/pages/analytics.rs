//! Analytics Page
//!
//! Metric cards, chart placeholders, and the analysis tool catalog.

use leptos::*;

use crate::components::PageShell;

static METRICS: [(&str, &str, &str, &str); 4] = [
    ("🌊", "28.5°C", "Avg Ocean Temp", "+0.8°C"),
    ("🐠", "2,847", "Species Identified", "+12%"),
    ("📊", "94.2%", "AI Accuracy", "+2.1%"),
    ("🔬", "156", "Active Studies", "+3"),
];

static CHARTS: [(&str, &str, &str); 6] = [
    (
        "Species Distribution",
        "Heat Map",
        "Geographic distribution of marine species across monitoring sites",
    ),
    (
        "Temperature Trends",
        "Time Series",
        "Ocean temperature changes over the past 12 months",
    ),
    (
        "Biodiversity Index",
        "Line Chart",
        "Ecosystem health indicators and biodiversity metrics",
    ),
    (
        "Species Composition",
        "Pie Chart",
        "Relative abundance of different species groups",
    ),
    (
        "Correlation Analysis",
        "Scatter Plot",
        "Relationship between environmental factors and species diversity",
    ),
    (
        "Predictive Model",
        "Forecast",
        "AI-driven predictions for ecosystem changes",
    ),
];

static TOOL_CATEGORIES: [(&str, [&str; 3]); 3] = [
    ("🤖 Machine Learning", ["Species Classifier", "Anomaly Detection", "Predictive Modeling"]),
    ("📈 Statistical Analysis", ["Correlation Analysis", "Regression Models", "Hypothesis Testing"]),
    ("🗺️ Spatial Analysis", ["Geographic Mapping", "Habitat Modeling", "Distribution Analysis"]),
];

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    view! {
        <PageShell
            active="analytics"
            title="Analytics Dashboard"
            subtitle="Advanced data analysis and visualization tools"
        >
            <div class="space-y-10">
                // Actions
                <div class="flex flex-wrap gap-3">
                    <button class="px-4 py-2 bg-cyan-600 hover:bg-cyan-500 rounded-lg font-medium transition-colors">
                        "📊 Create Visualization"
                    </button>
                    <button class="px-4 py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors">
                        "🔍 Run Analysis"
                    </button>
                    <button class="px-4 py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors">
                        "📄 Generate Report"
                    </button>
                </div>

                // Metric cards
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {METRICS.iter().map(|(icon, value, label, change)| view! {
                        <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5">
                            <div class="text-2xl">{*icon}</div>
                            <div class="text-2xl font-bold mt-2">{*value}</div>
                            <div class="text-sm text-blue-200 mt-1">{*label}</div>
                            <div class="text-xs text-green-400 mt-2">{*change}</div>
                        </div>
                    }).collect_view()}
                </div>

                // Chart placeholders
                <section>
                    <h2 class="text-xl font-semibold mb-4">"Data Visualizations"</h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {CHARTS.iter().map(|(title, kind, blurb)| view! {
                            <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5">
                                <div class="flex items-center justify-between">
                                    <h3 class="font-semibold">{*title}</h3>
                                    <span class="text-xs text-blue-300 bg-blue-950/60 px-2 py-1 rounded-full">{*kind}</span>
                                </div>
                                <div class="h-32 flex flex-col items-center justify-center text-center mt-3 bg-blue-950/40 rounded-lg">
                                    <span class="text-3xl">"📊"</span>
                                    <p class="text-xs text-blue-300 mt-2 px-4">{*blurb}</p>
                                </div>
                                <div class="flex gap-2 mt-4">
                                    <button class="px-3 py-1.5 bg-blue-800 hover:bg-blue-700 rounded-lg text-sm transition-colors">
                                        "View Details"
                                    </button>
                                    <button class="px-3 py-1.5 bg-blue-800 hover:bg-blue-700 rounded-lg text-sm transition-colors">
                                        "Export"
                                    </button>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </section>

                // Analysis tools
                <section>
                    <h2 class="text-xl font-semibold mb-4">"Analysis Tools"</h2>
                    <div class="grid md:grid-cols-3 gap-4">
                        {TOOL_CATEGORIES.iter().map(|(category, tools)| view! {
                            <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5">
                                <h3 class="font-semibold mb-3">{*category}</h3>
                                <div class="space-y-2">
                                    {tools.iter().map(|tool| view! {
                                        <button class="w-full text-left px-3 py-2 bg-blue-950/60 hover:bg-blue-800 rounded-lg text-sm transition-colors">
                                            {*tool}
                                        </button>
                                    }).collect_view()}
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            </div>
        </PageShell>
    }
}
