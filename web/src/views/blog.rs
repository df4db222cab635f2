use leptos::prelude::*;

use crate::catalog::{blog_categories, blog_posts};
use crate::components::icons::{
    BookmarkIcon, ChevronRightIcon, CloseIcon, CommentIcon, FilterIcon, HeartIcon, SearchIcon,
    ShareIcon,
};
use crate::state::blog::{
    clamp_page, filtered_posts, page_count, visible_posts, BlogFilter, SortMode, ViewerOverlay,
};
use crate::utils::dates::format_post_date;
use shared_types::BlogPost;

#[component]
fn LikeButton(
    post: BlogPost,
    overlay: RwSignal<ViewerOverlay>,
    #[prop(default = 20)] size: u32,
) -> impl IntoView {
    let id = post.id.clone();
    let toggle_id = post.id.clone();
    let likes_post = post.clone();

    view! {
        <button
            class="blog-action"
            class=("blog-action--active", move || overlay.with(|o| o.is_liked(&id)))
            on:click=move |ev| {
                ev.stop_propagation();
                overlay.update(|o| o.toggle_like(&toggle_id));
            }
        >
            <HeartIcon size=size/>
            <span>{move || overlay.with(|o| o.display_likes(&likes_post))}</span>
        </button>
    }
}

#[component]
fn SaveButton(
    post: BlogPost,
    overlay: RwSignal<ViewerOverlay>,
    #[prop(default = 20)] size: u32,
) -> impl IntoView {
    let id = post.id.clone();
    let toggle_id = post.id.clone();

    view! {
        <button
            class="blog-action"
            class=("blog-action--active", move || overlay.with(|o| o.is_saved(&id)))
            on:click=move |ev| {
                ev.stop_propagation();
                overlay.update(|o| o.toggle_save(&toggle_id));
            }
        >
            <BookmarkIcon size=size/>
        </button>
    }
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = StoredValue::new(blog_posts());
    let filter = RwSignal::new(BlogFilter::default());
    let overlay = RwSignal::new(ViewerOverlay::default());
    let show_filters = RwSignal::new(false);
    let selected_post = RwSignal::new(None::<BlogPost>);

    // Changing the category or query keeps the page; the pipeline clamps it
    // back into range when the result set shrinks.
    let visible = Memo::new(move |_| {
        let filter = filter.get();
        posts.with_value(|posts| {
            visible_posts(posts, &filter)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let pages = Memo::new(move |_| {
        let filter = filter.get();
        posts.with_value(|posts| {
            let shown = filtered_posts(posts, &filter).len();
            page_count(shown, filter.page_size)
        })
    });

    view! {
        <section id="blog" class="blog-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>"Beauty & Wellness Blog"</h2>
                    <p>"Discover the latest trends, tips, and expert advice in beauty and wellness"</p>
                </div>

                <div class="blog-toolbar">
                    <div class="blog-search">
                        <SearchIcon class="blog-search__icon"/>
                        <input
                            type="text"
                            placeholder="Search blog posts..."
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.query = value);
                            }
                        />
                        <Show when=move || filter.with(|f| !f.query.is_empty())>
                            <button
                                class="blog-search__clear"
                                on:click=move |_| filter.update(|f| f.query.clear())
                            >
                                <CloseIcon size=18/>
                            </button>
                        </Show>
                    </div>

                    <button
                        class="blog-filter-toggle"
                        on:click=move |_| show_filters.update(|open| *open = !*open)
                    >
                        <FilterIcon size=24/>
                    </button>
                </div>

                <Show when=move || show_filters.get()>
                    <div class="blog-filter-panel">
                        <h4>"Sort By"</h4>
                        <div class="blog-filter-panel__options">
                            <button
                                class="blog-pill"
                                class=("blog-pill--active", move || filter.with(|f| f.sort == SortMode::Latest))
                                on:click=move |_| filter.update(|f| f.sort = SortMode::Latest)
                            >
                                "Latest"
                            </button>
                            <button
                                class="blog-pill"
                                class=("blog-pill--active", move || filter.with(|f| f.sort == SortMode::Popular))
                                on:click=move |_| filter.update(|f| f.sort = SortMode::Popular)
                            >
                                "Most Popular"
                            </button>
                        </div>
                    </div>
                </Show>

                <div class="blog-categories">
                    {blog_categories()
                        .iter()
                        .map(|category| {
                            let category = *category;
                            view! {
                                <button
                                    class="blog-pill"
                                    class=("blog-pill--active", move || filter.with(|f| f.category == category))
                                    on:click=move |_| filter.update(|f| f.category = category.to_string())
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="blog-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|post| {
                                let open_post = post.clone();
                                view! {
                                    <article
                                        class="blog-card"
                                        on:click=move |_| selected_post.set(Some(open_post.clone()))
                                    >
                                        <div class="blog-card__media">
                                            <img src=post.image.clone() alt=post.title.clone()/>
                                            <span class="blog-card__category">{post.category.clone()}</span>
                                        </div>

                                        <div class="blog-card__body">
                                            <div class="blog-card__meta">
                                                <span>{format_post_date(post.date)}</span>
                                                <span class="blog-card__dot">"\u{2022}"</span>
                                                <span>{post.read_time.clone()}</span>
                                            </div>

                                            <h3>{post.title.clone()}</h3>
                                            <p class="blog-card__excerpt">{post.excerpt.clone()}</p>

                                            <div class="blog-card__actions">
                                                <div class="blog-card__social">
                                                    <LikeButton post=post.clone() overlay=overlay/>
                                                    <button class="blog-action" on:click=move |ev| ev.stop_propagation()>
                                                        <CommentIcon/>
                                                        <span>{post.comments}</span>
                                                    </button>
                                                    <button class="blog-action" on:click=move |ev| ev.stop_propagation()>
                                                        <ShareIcon/>
                                                    </button>
                                                </div>
                                                <SaveButton post=post.clone() overlay=overlay/>
                                            </div>

                                            <button class="blog-card__read-more">
                                                "Read More"
                                                <ChevronRightIcon size=16/>
                                            </button>
                                        </div>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="blog-pagination">
                    {move || {
                        (1..=pages.get())
                            .map(|page| {
                                view! {
                                    <button
                                        class="blog-page"
                                        class=("blog-page--active", move || {
                                            filter.with(|f| clamp_page(f.page, pages.get()) == page)
                                        })
                                        on:click=move |_| filter.update(|f| f.page = page)
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="blog-view-all">
                    <button class="blog-view-all__button">"View All Posts"</button>
                </div>
            </div>

            <Show when=move || selected_post.get().is_some()>
                <div class="blog-modal-overlay show" on:click=move |_| selected_post.set(None)>
                    {move || {
                        selected_post.get().map(|post| {
                            view! {
                                <div class="blog-modal" on:click=move |ev| ev.stop_propagation()>
                                    <div class="blog-modal__media">
                                        <img src=post.image.clone() alt=post.title.clone()/>
                                        <button
                                            class="blog-modal__close"
                                            on:click=move |_| selected_post.set(None)
                                        >
                                            <CloseIcon size=24/>
                                        </button>
                                    </div>

                                    <div class="blog-modal__body">
                                        <h2>{post.title.clone()}</h2>
                                        <div class="blog-card__meta">
                                            <span>{format_post_date(post.date)}</span>
                                            <span class="blog-card__dot">"\u{2022}"</span>
                                            <span>{post.read_time.clone()}</span>
                                        </div>

                                        <div class="blog-modal__content">{post.content.clone()}</div>

                                        <div class="blog-modal__tags">
                                            <h3>"Tags"</h3>
                                            <div class="blog-modal__tag-list">
                                                {post
                                                    .tags
                                                    .iter()
                                                    .map(|tag| view! { <span class="blog-tag">{tag.clone()}</span> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>

                                        <div class="blog-modal__actions">
                                            <div class="blog-card__social">
                                                <LikeButton post=post.clone() overlay=overlay size=24/>
                                                <button class="blog-action">
                                                    <CommentIcon size=24/>
                                                    <span>{post.comments}</span>
                                                </button>
                                                <button class="blog-action">
                                                    <ShareIcon size=24/>
                                                </button>
                                            </div>
                                            <SaveButton post=post.clone() overlay=overlay size=24/>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }}
                </div>
            </Show>
        </section>
    }
}
