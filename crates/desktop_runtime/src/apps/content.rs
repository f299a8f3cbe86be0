use desktop_app_contract::{AppKey, AppMountContext};
use leptos::*;
use site_content::{render, ContentBlock, FileEntry, SystemStat};

/// Mounts a static content window. Only [`AppKey::Content`] keys reach this function.
pub(super) fn mount(context: AppMountContext) -> View {
    let AppKey::Content(topic) = context.app else {
        return view! { <div class="centered">"No preview available"</div> }.into_view();
    };
    let content = render(topic, context.launch_seed);
    let blocks = content
        .blocks
        .into_iter()
        .map(render_block)
        .collect_view();

    view! {
        <div class=format!("content-window content-{}", topic.as_str())>
            <h2 class="content-title">{content.title}</h2>
            {blocks}
        </div>
    }
    .into_view()
}

fn render_block(block: ContentBlock) -> View {
    match block {
        ContentBlock::Sections(sections) => sections
            .iter()
            .map(|section| {
                view! {
                    <section class="content-section">
                        <h3>{section.heading}</h3>
                        <p>{section.body}</p>
                    </section>
                }
            })
            .collect_view(),
        ContentBlock::Projects(projects) => view! {
            <div class="project-grid">
                {projects
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <h3>
                                    <a href=project.link target="_blank" rel="noopener noreferrer">
                                        {project.title}
                                    </a>
                                </h3>
                                <p>{project.summary}</p>
                                <ul class="tech-tags">
                                    {project
                                        .techs
                                        .iter()
                                        .map(|tech| view! { <li class="tech-tag">{*tech}</li> })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        ContentBlock::Skills(skills) => view! {
            <ul class="skill-list">
                {skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="skill-item">
                                <span class="skill-name">{skill.name}</span>
                                <div class="skill-bar-track">
                                    <div class="skill-bar" style=format!("width: {}%", skill.level)></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        ContentBlock::Links(links) => view! {
            <ul class="contact-list">
                {links
                    .iter()
                    .map(|link| {
                        let body = match link.href {
                            Some(href) => view! {
                                <a href=href target="_blank" rel="noopener noreferrer">{href}</a>
                            }
                            .into_view(),
                            None => view! { <span class="muted">{link.note.unwrap_or_default()}</span> }
                                .into_view(),
                        };
                        view! {
                            <li class="contact-item">
                                <strong>{link.label}": "</strong>
                                {body}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        ContentBlock::Files(files) => view! {
            <div class="file-grid">{files.iter().map(file_tile).collect_view()}</div>
        }
        .into_view(),
        ContentBlock::Stats(stats) => view! {
            <div class="system-stats">{stats.iter().map(stat_row).collect_view()}</div>
        }
        .into_view(),
        ContentBlock::Commands(entries) => view! {
            <table class="help-table">
                <tbody>
                    {entries
                        .iter()
                        .map(|entry| {
                            view! {
                                <tr>
                                    <td class="help-command">{entry.usage}</td>
                                    <td>{entry.summary}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_view(),
        ContentBlock::Quote(quote) => view! { <blockquote class="quote-content">{quote}</blockquote> }
            .into_view(),
    }
}

fn file_tile(file: &FileEntry) -> View {
    let kind_class = if file.kind.is_folder() {
        "file-item folder"
    } else {
        "file-item"
    };
    view! {
        <div class=kind_class>
            <span class="file-icon" aria-hidden="true"></span>
            <span class="file-name">{file.name}</span>
        </div>
    }
    .into_view()
}

fn stat_row(stat: &SystemStat) -> View {
    let gauge = stat.usage.map(|usage| {
        view! {
            <div class="stat-bar-track">
                <div class="stat-bar" style=format!("width: {usage}%")></div>
            </div>
        }
    });
    view! {
        <div class="stat-item">
            <span class="stat-label">{stat.label}</span>
            <span class="stat-value">{stat.value}</span>
            {gauge}
        </div>
    }
    .into_view()
}

#[component]
/// Body of a transient system message window.
pub fn NoticeView(message: String) -> impl IntoView {
    view! {
        <div class="warning-content" role="alert">
            <p>{message}</p>
        </div>
    }
}
