// ============================================================================
// CAR FORM VIEWMODEL - create / edit / submit
// ============================================================================

use crate::models::{Car, CarField, CarForm, DraftError, FieldValue, FormTarget, ImageUpload};
use crate::services::{routes, SubmitMethod};
use crate::state::{CollectionKind, Notice, Section};
use crate::viewmodels::AdminViewModel;

const SAVE_FAILED: &str = "Failed to save car";

impl AdminViewModel {
    /// Blank draft in create mode, form panel shown
    pub fn start_create(&self) {
        self.state.replace_car_form(CarForm::default());
        self.state.set_section(Section::CarForm);
        self.state.notify_subscribers();
    }

    /// Seeds the draft from `car` and targets it; pending images are dropped
    pub fn start_edit(&self, car: &Car) {
        log::info!("✏️ [CAR FORM] Editing {}", car.id);
        self.state.replace_car_form(CarForm::editing(car));
        self.state.set_section(Section::CarForm);
        self.state.notify_subscribers();
    }

    /// Keystroke-level update; does not re-render
    pub fn set_field(&self, field: CarField, value: FieldValue) -> Result<(), DraftError> {
        self.state.car_form.borrow_mut().draft.set(field, value)
    }

    pub fn set_images(&self, images: Vec<ImageUpload>) {
        log::debug!("🖼️ [CAR FORM] {} image(s) selected", images.len());
        self.state.car_form.borrow_mut().draft.images = images;
    }

    /// Token identifying the form currently being edited
    pub fn car_form_epoch(&self) -> u64 {
        self.state.car_form_epoch()
    }

    /// Stores images read for the form identified by `epoch`. Returns false
    /// and drops them when the form was replaced while they were being read.
    pub fn set_images_for(&self, epoch: u64, images: Vec<ImageUpload>) -> bool {
        if self.state.car_form_epoch() != epoch {
            log::warn!("⏭️ [CAR FORM] Dropping {} image(s) read for a replaced form", images.len());
            return false;
        }
        self.set_images(images);
        true
    }

    pub fn cancel_edit(&self) {
        self.state.replace_car_form(CarForm::default());
        self.state.notify_subscribers();
    }

    /// Sends the whole draft. Returns whether the server accepted it.
    pub async fn submit_car(&self) -> bool {
        if !self.state.session.is_authenticated() {
            return false;
        }
        let Some(guard) = self.state.begin_loading() else {
            log::warn!("⏳ [CAR FORM] Submission already in flight, ignoring");
            return false;
        };
        self.state.notify_subscribers();

        let (target, payload) = {
            let form = self.state.car_form.borrow();
            (form.target.clone(), form.draft.to_multipart())
        };
        let (method, path) = match &target {
            FormTarget::Edit { car_id } => (SubmitMethod::Put, routes::car_item(car_id)),
            FormTarget::Create => (SubmitMethod::Post, routes::CAR_ADD.to_string()),
        };

        let result = self.api.send_car(method, &path, &payload).await;
        guard.release();

        match result {
            Ok(()) => {
                let message = match target {
                    FormTarget::Edit { .. } => "Car updated successfully!",
                    FormTarget::Create => "Car added successfully!",
                };
                log::info!("✅ [CAR FORM] {}", message);
                self.state.replace_car_form(CarForm::default());
                self.state.push_notice(Notice::success(message));
                self.state.notify_subscribers();
                self.refresh(CollectionKind::Cars).await;
                true
            }
            Err(e) => {
                self.report_failure("CAR FORM", &e, e.user_message(SAVE_FAILED));
                self.state.notify_subscribers();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CarDraft;
    use crate::services::ApiError;
    use crate::testing::{creta, Harness};
    use futures::executor::block_on;
    use serde_json::json;

    fn creta_car() -> Car {
        serde_json::from_value(creta()).unwrap()
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn start_edit_then_cancel_restores_blank_draft_without_requests() {
        let h = Harness::authenticated();
        let before = h.state().car_form.borrow().clone();

        h.vm.start_edit(&creta_car());
        assert_eq!(h.state().get_section(), Section::CarForm);
        assert_eq!(h.state().car_form.borrow().editing_id(), Some("car123"));

        h.vm.cancel_edit();

        assert_eq!(*h.state().car_form.borrow(), before);
        assert_eq!(h.state().car_form.borrow().draft, CarDraft::default());
        assert!(h.api.requests().is_empty());
    }

    #[test]
    fn start_edit_drops_pending_images() {
        let h = Harness::authenticated();
        h.vm.set_images(vec![ImageUpload {
            file_name: "old.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        }]);

        h.vm.start_edit(&creta_car());
        assert!(h.state().car_form.borrow().draft.images.is_empty());
    }

    #[test]
    fn update_sends_put_with_all_fields_and_refreshes() {
        let h = Harness::authenticated();
        h.api.serve(routes::CARS, json!([creta()]));
        h.vm.start_edit(&creta_car());
        h.vm.set_field(CarField::PricePerDay, text("1800")).unwrap();

        assert!(block_on(h.vm.submit_car()));

        let puts = h.api.requests_with("PUT");
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].path, "/admin/cars/car123");
        let payload = puts[0].payload.as_ref().unwrap();
        assert_eq!(payload.fields.len(), CarField::ALL.len());
        assert_eq!(payload.field("type"), Some("SUV"));
        assert_eq!(payload.field("model"), Some("Creta"));
        assert_eq!(payload.field("name"), Some("Creta 2024"));
        assert_eq!(payload.field("pricePerDay"), Some("1800"));
        assert!(payload.files.is_empty());

        assert!(!h.state().car_form.borrow().is_editing());
        assert_eq!(h.state().car_form.borrow().draft, CarDraft::default());
        assert_eq!(h.api.requests_with("GET").len(), 1);
        assert_eq!(h.state().cars.borrow()[0].price_per_day.as_deref(), Some("1800"));
        assert_eq!(h.state().get_notices(), vec![Notice::success("Car updated successfully!")]);
        assert!(!h.state().is_loading());
    }

    #[test]
    fn create_posts_to_add_and_resets_form() {
        let h = Harness::authenticated();
        h.vm.start_create();
        h.vm.set_field(CarField::Type, text("Mini")).unwrap();
        h.vm.set_field(CarField::Model, text("Swift")).unwrap();
        h.vm.set_field(CarField::Name, text("Swift VXi")).unwrap();
        h.vm.set_field(CarField::Available, FieldValue::Flag(false)).unwrap();
        h.vm.set_images(vec![
            ImageUpload {
                file_name: "front.jpg".into(),
                content_type: "image/jpeg".into(),
                bytes: vec![0xff, 0xd8],
            },
            ImageUpload {
                file_name: "rear.jpg".into(),
                content_type: "image/jpeg".into(),
                bytes: vec![0xff, 0xd8],
            },
        ]);

        assert!(block_on(h.vm.submit_car()));

        let posts = h.api.requests_with("POST");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].path, "/admin/cars/add");
        let payload = posts[0].payload.as_ref().unwrap();
        assert_eq!(payload.field("available"), Some("false"));
        assert_eq!(payload.files.len(), 2);

        let form = h.state().car_form.borrow().clone();
        assert_eq!(form, CarForm::default());
        assert_eq!(h.state().cars.borrow().len(), 1);
        assert_eq!(h.state().get_notices()[0].message, "Car added successfully!");
    }

    #[test]
    fn failed_submit_keeps_draft_and_target() {
        let h = Harness::authenticated();
        h.vm.start_edit(&creta_car());
        h.vm.set_field(CarField::Seats, text("7")).unwrap();
        h.api.fail(
            "PUT",
            "/admin/cars/car123",
            ApiError::Server {
                status: 400,
                message: Some("Invalid seats".into()),
            },
        );

        assert!(!block_on(h.vm.submit_car()));

        let form = h.state().car_form.borrow().clone();
        assert_eq!(form.editing_id(), Some("car123"));
        assert_eq!(form.draft.seats, "7");
        assert_eq!(h.state().get_notices(), vec![Notice::error("Invalid seats")]);
        assert!(h.api.requests_with("GET").is_empty());
        assert!(!h.state().is_loading());
    }

    #[test]
    fn failed_submit_without_message_uses_fallback() {
        let h = Harness::authenticated();
        h.vm.start_create();
        h.api.fail("POST", "/admin/cars/add", ApiError::Network("offline".into()));

        assert!(!block_on(h.vm.submit_car()));
        assert_eq!(h.state().get_notices()[0].message, "Failed to save car");
    }

    #[test]
    fn rejected_token_on_submit_keeps_the_draft_for_retry() {
        let h = Harness::authenticated();
        h.vm.start_edit(&creta_car());
        h.vm.set_field(CarField::Seats, text("7")).unwrap();
        h.api.fail(
            "PUT",
            "/admin/cars/car123",
            ApiError::Unauthorized {
                status: 401,
                message: None,
            },
        );

        assert!(!block_on(h.vm.submit_car()));

        assert!(!h.state().session.is_authenticated());
        assert_eq!(h.state().get_notices()[0].message, "Session expired, please log in again");
        let form = h.state().car_form.borrow().clone();
        assert_eq!(form.editing_id(), Some("car123"));
        assert_eq!(form.draft.seats, "7");
        assert_eq!(h.state().get_section(), Section::CarForm);

        // After signing in again the same edit goes through
        h.api.login_with(Ok(crate::testing::login_ok("jwt-fresh")));
        assert!(block_on(h.vm.login("admin@admin.com", "admin123")));
        assert_eq!(h.state().car_form.borrow().draft.seats, "7");
        assert!(block_on(h.vm.submit_car()));
        let puts = h.api.requests_with("PUT");
        assert_eq!(puts.last().unwrap().payload.as_ref().unwrap().field("seats"), Some("7"));
    }

    #[test]
    fn images_read_for_a_replaced_form_are_dropped() {
        let h = Harness::authenticated();
        h.vm.start_create();
        let epoch = h.vm.car_form_epoch();
        let image = ImageUpload {
            file_name: "front.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![0xff, 0xd8],
        };

        h.vm.start_edit(&creta_car());

        assert!(!h.vm.set_images_for(epoch, vec![image.clone()]));
        assert!(h.state().car_form.borrow().draft.images.is_empty());

        let current = h.vm.car_form_epoch();
        assert!(h.vm.set_images_for(current, vec![image]));
        assert_eq!(h.state().car_form.borrow().draft.images.len(), 1);
    }

    #[test]
    fn submit_is_ignored_while_loading() {
        let h = Harness::authenticated();
        h.vm.start_create();
        let _busy = h.state().begin_loading().unwrap();

        assert!(!block_on(h.vm.submit_car()));
        assert!(h.api.requests().is_empty());
    }

    #[test]
    fn mistyped_field_leaves_draft_unchanged() {
        let h = Harness::authenticated();
        h.vm.start_create();
        assert!(h.vm.set_field(CarField::Available, text("on")).is_err());
        assert!(h.state().car_form.borrow().draft.available);
    }
}
