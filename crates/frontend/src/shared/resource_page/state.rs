use crate::shared::api_client::ResourceClient;
use crate::shared::config::config;
use contracts::domain::common::{AggregateRoot, RecordId};
use contracts::shared::api::{MutationKind, PageError};
use contracts::shared::form::FormState;
use contracts::shared::list::PaginatedListController;
use contracts::shared::view_mode::{ViewEvent, ViewMode};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Реактивное состояние страницы справочника: список, режим экрана, форма
pub struct ResourceState<R: AggregateRoot> {
    pub list: RwSignal<PaginatedListController<R>>,
    pub mode: RwSignal<ViewMode>,
    pub form: RwSignal<FormState<R::Dto>>,
    /// Текст ошибки, показываемый над таблицей или формой
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

// derive требовал бы R: Copy
impl<R: AggregateRoot> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: AggregateRoot> Copy for ResourceState<R> {}

impl<R: AggregateRoot> ResourceState<R> {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(PaginatedListController::with_page_size(
                Vec::new(),
                config().list.page_size(),
            )),
            mode: RwSignal::new(ViewMode::List),
            form: RwSignal::new(FormState::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Перечитать всю коллекцию с сервера
    pub fn load(self) {
        self.loading.set(true);
        self.error.set(None);
        spawn_local(async move {
            match ResourceClient::<R>::new().list().await {
                Ok(items) => {
                    log::info!("{}: loaded {} records", R::full_name(), items.len());
                    self.list.update(|list| list.set_items(items));
                }
                Err(e) => self.fail(PageError::Fetch(e)),
            }
            self.loading.set(false);
        });
    }

    /// Переход между экранами списка, формы и обзора
    pub fn dispatch(self, event: ViewEvent) {
        let next = match self.mode.get_untracked().transition(event) {
            Ok(next) => next,
            Err(e) => {
                log::warn!("{}: {}", R::full_name(), e);
                return;
            }
        };

        match &next {
            ViewMode::Create => self.form.update(|form| form.reset()),
            ViewMode::Edit(id) => {
                let record = self.list.with_untracked(|list| list.find(id).cloned());
                match record {
                    Some(record) => self.form.set(FormState::for_edit(&record)),
                    None => {
                        self.error
                            .set(Some(format!("{} {} not found", R::element_name(), id)));
                        return;
                    }
                }
            }
            ViewMode::List | ViewMode::Overview(_) => {}
        }

        self.error.set(None);
        self.mode.set(next);
    }

    pub fn set_field(self, field: &'static str, value: String) {
        self.form.update(|form| {
            if let Err(e) = form.set_field(field, value) {
                log::warn!("{}: {}", R::full_name(), e);
            }
        });
    }

    pub fn toggle_flag(self, field: &'static str) {
        self.form.update(|form| {
            if let Err(e) = form.toggle_flag(field) {
                log::warn!("{}: {}", R::full_name(), e);
            }
        });
    }

    /// Проверить форму и отправить create или update
    pub fn submit(self) {
        if self.saving.get_untracked() {
            return;
        }

        let prepared = self
            .form
            .with_untracked(|form| form.submit().map(|payload| (payload, form.editing_id().cloned())));
        let (payload, editing) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                self.fail(PageError::from(e));
                return;
            }
        };

        self.saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let client = ResourceClient::<R>::new();
            let result = match &editing {
                Some(id) => client
                    .update(id, &payload)
                    .await
                    .map_err(|e| PageError::mutation(MutationKind::Update, e)),
                None => client
                    .create(&payload)
                    .await
                    .map_err(|e| PageError::mutation(MutationKind::Create, e)),
            };
            self.saving.set(false);

            match result {
                Ok(record) => {
                    log::info!("{}: saved {}", R::full_name(), record.id());
                    self.list.update(|list| list.upsert(record));
                    self.dispatch(ViewEvent::Submitted);
                }
                Err(e) => self.fail(e),
            }
        });
    }

    pub fn toggle_status(self, id: RecordId) {
        spawn_local(async move {
            match ResourceClient::<R>::new().toggle_status(&id).await {
                Ok(record) => self.list.update(|list| {
                    if !list.replace_record(record) {
                        log::warn!("{}: toggled record {} is not in the list", R::full_name(), id);
                    }
                }),
                Err(e) => self.fail(PageError::mutation(MutationKind::ToggleStatus, e)),
            }
        });
    }

    /// Удаление после подтверждения пользователем
    pub fn delete(self, id: RecordId) {
        let name = self
            .list
            .with_untracked(|list| list.find(&id).map(|r| r.display_name().to_string()))
            .unwrap_or_else(|| id.to_string());
        let message = format!("Delete {} \"{}\"?", R::element_name().to_lowercase(), name);
        if !confirm(&message) {
            return;
        }

        spawn_local(async move {
            match ResourceClient::<R>::new().delete(&id).await {
                Ok(()) => self.list.update(|list| {
                    list.remove(&id);
                }),
                Err(e) => self.fail(PageError::mutation(MutationKind::Delete, e)),
            }
        });
    }

    fn fail(self, error: PageError) {
        log::error!("{}: {}", R::full_name(), error);
        self.error.set(Some(error.to_string()));
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
