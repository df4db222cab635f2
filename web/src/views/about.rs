use leptos::prelude::*;

struct AboutTab {
    id: &'static str,
    title: &'static str,
    heading: &'static str,
    copy: &'static str,
}

fn tabs() -> [AboutTab; 3] {
    [
        AboutTab {
            id: "story",
            title: "Our Origin",
            heading: "The Hadaza Legacy",
            copy: "Inspired by Queen Esther's transformative journey, we craft beauty that \
                   transcends physical appearance. Our studio represents the art of revealing \
                   inner confidence through meticulous grooming and personalized care.",
        },
        AboutTab {
            id: "mission",
            title: "Our Mission",
            heading: "Beauty With Intention",
            copy: "Every appointment is a collaboration. We listen first, then bring together \
                   technique, premium products, and honest advice so you leave feeling like the \
                   best version of yourself.",
        },
        AboutTab {
            id: "craft",
            title: "Our Craft",
            heading: "Masters of the Detail",
            copy: "From precision cuts to bridal artistry, our stylists train continuously and \
                   obsess over the little things: the finish, the fade, the final flourish.",
        },
    ]
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let active_tab = RwSignal::new("story");

    view! {
        <section id="about" class="about-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>"About Hadaza"</h2>
                    <p>"A grooming studio built on craft, warmth, and a touch of drama"</p>
                </div>

                <div class="about-tabs">
                    {tabs()
                        .into_iter()
                        .map(|tab| {
                            let id = tab.id;
                            view! {
                                <button
                                    class="about-tab"
                                    class=("about-tab--active", move || active_tab.get() == id)
                                    on:click=move |_| active_tab.set(id)
                                >
                                    {tab.title}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="about-content">
                    {move || {
                        tabs()
                            .into_iter()
                            .find(|tab| tab.id == active_tab.get())
                            .map(|tab| {
                                view! {
                                    <div class="about-panel">
                                        <h3>{tab.heading}</h3>
                                        <p>{tab.copy}</p>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="about-stats">
                    <div class="about-stat">
                        <span class="about-stat__value">"12+"</span>
                        <span class="about-stat__label">"Years of craft"</span>
                    </div>
                    <div class="about-stat">
                        <span class="about-stat__value">"8,000+"</span>
                        <span class="about-stat__label">"Happy clients"</span>
                    </div>
                    <div class="about-stat">
                        <span class="about-stat__value">"40+"</span>
                        <span class="about-stat__label">"Signature services"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
