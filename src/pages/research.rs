//! Research Page
//!
//! Project cards with progress bars and the research tools grid.

use leptos::*;
use leptos_router::*;

use crate::components::PageShell;

struct Project {
    title: &'static str,
    status: &'static str,
    progress: u32,
    collaborators: u32,
    last_update: &'static str,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "Coral Reef Biodiversity Assessment",
        status: "Active",
        progress: 75,
        collaborators: 8,
        last_update: "2 hours ago",
    },
    Project {
        title: "Deep Sea Species Discovery",
        status: "Active",
        progress: 45,
        collaborators: 12,
        last_update: "1 day ago",
    },
    Project {
        title: "Ocean Temperature Impact Study",
        status: "Review",
        progress: 95,
        collaborators: 6,
        last_update: "3 days ago",
    },
    Project {
        title: "Marine Plastic Pollution Analysis",
        status: "Planning",
        progress: 15,
        collaborators: 4,
        last_update: "1 week ago",
    },
];

static TOOLS: [(&str, &str, &str, Option<&str>); 4] = [
    ("🔬", "Species Analyzer", "AI-powered species identification and classification", Some("/analytics")),
    ("📈", "Data Visualizer", "Create interactive charts and visualizations", Some("/data-hub")),
    ("💻", "Jupyter Notebooks", "Cloud-based research environment", None),
    ("🌐", "Collaboration Hub", "Share and discuss research findings", None),
];

/// Research page component
#[component]
pub fn Research() -> impl IntoView {
    view! {
        <PageShell
            active="research"
            title="Research Projects"
            subtitle="Manage and collaborate on marine research initiatives"
        >
            <div class="space-y-10">
                // Actions
                <div class="flex flex-wrap gap-3">
                    <A
                        href="/data-hub"
                        class="px-4 py-2 bg-cyan-600 hover:bg-cyan-500 rounded-lg font-medium transition-colors"
                    >
                        "📊 New Project"
                    </A>
                    <button class="px-4 py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors">
                        "📁 Import Data"
                    </button>
                    <button class="px-4 py-2 bg-blue-800 hover:bg-blue-700 rounded-lg font-medium transition-colors">
                        "👥 Invite Collaborators"
                    </button>
                </div>

                // Active projects
                <section>
                    <h2 class="text-xl font-semibold mb-4">"Active Projects"</h2>
                    <div class="grid md:grid-cols-2 gap-4">
                        {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                    </div>
                </section>

                // Tools
                <section>
                    <h2 class="text-xl font-semibold mb-4">"Research Tools"</h2>
                    <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        {TOOLS.iter().map(|(icon, title, blurb, path)| {
                            let card = view! {
                                <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5 h-full hover:border-cyan-500 transition-colors">
                                    <div class="text-3xl">{*icon}</div>
                                    <h3 class="font-semibold mt-2">{*title}</h3>
                                    <p class="text-sm text-blue-200 mt-1">{*blurb}</p>
                                </div>
                            };
                            match path {
                                Some(path) => view! { <A href=*path class="block">{card}</A> }.into_view(),
                                None => card.into_view(),
                            }
                        }).collect_view()}
                    </div>
                </section>
            </div>
        </PageShell>
    }
}

/// Project summary with status badge and progress bar.
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let status_class = match project.status {
        "Active" => "text-xs font-bold bg-green-600/80 px-2 py-1 rounded-full",
        "Review" => "text-xs font-bold bg-amber-500/80 px-2 py-1 rounded-full",
        _ => "text-xs font-bold bg-blue-700/80 px-2 py-1 rounded-full",
    };

    view! {
        <div class="bg-blue-900/40 border border-blue-800 rounded-xl p-5">
            <div class="flex items-start justify-between">
                <h3 class="font-semibold pr-4">{project.title}</h3>
                <span class=status_class>{project.status}</span>
            </div>

            <div class="mt-4">
                <div class="h-2 bg-blue-950 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-cyan-500 to-blue-500"
                        style=format!("width: {}%", project.progress)
                    />
                </div>
                <p class="text-xs text-blue-300 mt-1">{format!("{}% Complete", project.progress)}</p>
            </div>

            <div class="flex items-center justify-between text-sm text-blue-300 mt-4">
                <span>{format!("👥 {} Collaborators", project.collaborators)}</span>
                <span>{format!("📅 Updated {}", project.last_update)}</span>
            </div>
        </div>
    }
}
