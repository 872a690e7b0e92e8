//! Lazily loaded content sections.
//!
//! A [`LazySection`] defers producing a section's real content until the
//! first render request. Until the deferred factory settles, every render
//! returns the placeholder; the factory runs at most once per section, no
//! matter how often the owning page re-renders.
//!
//! The section does not know what content is. It hands back plain data
//! (`T`) and lets the presentation layer decide how to draw placeholders,
//! content, and failures.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use executor_core::spawn_local;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use nami::{Binding, Computed, Signal, SignalExt, binding};
use swell_core::{LoadError, LoadState};
use tracing::warn;

/// How a spawned load future gets onto the executor.
///
/// The default is the executor stack's `spawn_local`; tests inject a
/// deterministic local pool instead.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

type SectionFuture<T> = LocalBoxFuture<'static, Result<T, LoadError>>;
type SectionFactory<T> = Box<dyn FnOnce() -> SectionFuture<T>>;

/// What a render request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView<T> {
    /// The content is not available yet; show the placeholder.
    Placeholder(T),
    /// The loaded content.
    Ready(T),
    /// The factory failed; the caller decides what to show.
    Failed(LoadError),
}

impl<T> SectionView<T> {
    /// `true` for loaded content.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// `true` while the placeholder is being shown.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// A content section whose real content is produced on first render.
///
/// Cloning shares the loader state; the factory still runs at most once
/// across all clones.
#[derive(Clone)]
pub struct LazySection<T: 'static + Clone> {
    inner: Rc<SectionInner<T>>,
}

struct SectionInner<T: 'static + Clone> {
    placeholder: T,
    factory: RefCell<Option<SectionFactory<T>>>,
    state: Binding<LoadState<T>>,
    spawner: Spawner,
}

impl<T: 'static + Clone> LazySection<T> {
    /// Creates a section that loads through the default executor.
    pub fn new<F, Fut>(placeholder: T, factory: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, LoadError>> + 'static,
    {
        Self::with_spawner(
            placeholder,
            factory,
            Rc::new(|future| {
                spawn_local(future).detach();
            }),
        )
    }

    /// Creates a section with an explicit spawner.
    pub fn with_spawner<F, Fut>(placeholder: T, factory: F, spawner: Spawner) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, LoadError>> + 'static,
    {
        Self {
            inner: Rc::new(SectionInner {
                placeholder,
                factory: RefCell::new(Some(Box::new(move || factory().boxed_local()))),
                state: binding(LoadState::NotRequested),
                spawner,
            }),
        }
    }

    /// Requests a render.
    ///
    /// The first call starts the load and returns the placeholder
    /// immediately; the render path never waits for the factory. Later
    /// calls return the placeholder until the factory settles, then the
    /// content or the stored failure.
    pub fn render(&self) -> SectionView<T> {
        match self.inner.state.get() {
            LoadState::NotRequested => {
                self.begin_load();
                SectionView::Placeholder(self.inner.placeholder.clone())
            }
            LoadState::Loading => SectionView::Placeholder(self.inner.placeholder.clone()),
            LoadState::Ready(content) => SectionView::Ready(content),
            LoadState::Failed(error) => SectionView::Failed(error),
        }
    }

    /// Like [`render`](Self::render), but collapses a failure to the
    /// placeholder, which is what a page that has no dedicated error view
    /// wants.
    pub fn render_or_placeholder(&self) -> T {
        match self.render() {
            SectionView::Placeholder(view) | SectionView::Ready(view) => view,
            SectionView::Failed(_) => self.inner.placeholder.clone(),
        }
    }

    /// The loader state as a reactive signal.
    #[must_use]
    pub fn state(&self) -> Computed<LoadState<T>> {
        self.inner.state.clone().computed()
    }

    /// The placeholder shown until content is available.
    #[must_use]
    pub fn placeholder(&self) -> &T {
        &self.inner.placeholder
    }

    fn begin_load(&self) {
        let Some(factory) = self.inner.factory.borrow_mut().take() else {
            return;
        };
        self.inner.state.set(LoadState::Loading);
        let weak = Rc::downgrade(&self.inner);
        (self.inner.spawner)(
            async move {
                let result = factory().await;
                let Some(inner) = weak.upgrade() else {
                    // Section discarded while loading; nothing to update.
                    return;
                };
                match result {
                    Ok(content) => inner.state.set(LoadState::Ready(content)),
                    Err(error) => {
                        warn!("lazy section failed to load: {error}");
                        inner.state.set(LoadState::Failed(error));
                    }
                }
            }
            .boxed_local(),
        );
    }
}

impl<T: 'static + Clone + fmt::Debug> fmt::Debug for LazySection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySection")
            .field("state", &self.inner.state.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;

    fn pool_spawner(pool: &LocalPool) -> Spawner {
        let spawner = pool.spawner();
        Rc::new(move |future| {
            spawner.spawn_local(future).expect("spawn on local pool");
        })
    }

    #[test]
    fn factory_runs_once_across_repeated_renders() {
        let mut pool = LocalPool::new();
        let calls = Rc::new(Cell::new(0));
        let (sender, receiver) = oneshot::channel::<&'static str>();

        let factory_calls = Rc::clone(&calls);
        let section = LazySection::with_spawner(
            "skeleton",
            move || {
                factory_calls.set(factory_calls.get() + 1);
                async move { receiver.await.map_err(|_| LoadError::new("cancelled")) }
            },
            pool_spawner(&pool),
        );

        assert_eq!(section.state().get(), LoadState::NotRequested);
        assert_eq!(section.render(), SectionView::Placeholder("skeleton"));
        assert_eq!(section.render(), SectionView::Placeholder("skeleton"));
        assert_eq!(section.render(), SectionView::Placeholder("skeleton"));

        pool.run_until_stalled();
        assert_eq!(calls.get(), 1);
        assert!(section.state().get().is_loading());
        assert_eq!(section.render(), SectionView::Placeholder("skeleton"));

        sender.send("the real section").expect("receiver alive");
        pool.run_until_stalled();
        assert_eq!(calls.get(), 1);
        assert_eq!(section.render(), SectionView::Ready("the real section"));
    }

    #[test]
    fn failure_is_surfaced_and_placeholder_fallback_works() {
        let mut pool = LocalPool::new();
        let section = LazySection::with_spawner(
            "skeleton",
            || async { Err(LoadError::new("boom")) },
            pool_spawner(&pool),
        );

        assert_eq!(section.render(), SectionView::Placeholder("skeleton"));
        pool.run_until_stalled();

        assert_eq!(section.render(), SectionView::Failed(LoadError::new("boom")));
        assert_eq!(section.render_or_placeholder(), "skeleton");
        assert_eq!(
            section.state().get().error(),
            Some(&LoadError::new("boom"))
        );
    }

    #[test]
    fn immediate_factory_resolves_after_one_executor_pass() {
        let mut pool = LocalPool::new();
        let section = LazySection::with_spawner(
            "skeleton",
            || async { Ok("content") },
            pool_spawner(&pool),
        );

        assert_eq!(section.render(), SectionView::Placeholder("skeleton"));
        pool.run_until_stalled();
        assert_eq!(section.render(), SectionView::Ready("content"));
    }

    #[test]
    fn discarding_the_section_mid_load_abandons_the_result() {
        let mut pool = LocalPool::new();
        let (sender, receiver) = oneshot::channel::<&'static str>();
        let section = LazySection::with_spawner(
            "skeleton",
            move || async move { receiver.await.map_err(|_| LoadError::new("cancelled")) },
            pool_spawner(&pool),
        );

        section.render();
        let state = section.state();
        drop(section);

        sender.send("too late").expect("receiver alive");
        pool.run_until_stalled();
        assert!(state.get().is_loading());
    }
}
