use crate::state_file;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use rondel::RoundSelector;
use rondel::geometry::{Point, Size};
use rondel::widget::{Constraints, PointerEvent, Widget};
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    selector: Rc<RefCell<RoundSelector>>,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Tap(Point),
    Resized(i32, i32),
    Quit,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = RoundSelector;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Rondel"),
            set_default_width: 480,
            set_default_height: 480,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resized(width, height));
                },

                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Tap(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        selector: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let selector = Rc::new(RefCell::new(selector));

        let model = AppModel {
            selector: selector.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        // the widget's natural size seeds the window's content request
        let natural = selector.borrow().measure(Constraints::unspecified());
        widgets.drawing_area.set_content_width(natural.width as i32);
        widgets.drawing_area.set_content_height(natural.height as i32);

        let paint_selector = selector.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = paint_selector.borrow().paint(cr) {
                log::error!("paint failed: {e}");
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tap(position) => {
                let redraw = self
                    .selector
                    .borrow_mut()
                    .handle_pointer(PointerEvent { position });
                if redraw.is_needed() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Resized(width, height) => {
                self.selector
                    .borrow_mut()
                    .layout(Size::new(f64::from(width), f64::from(height)));
                self.drawing_area.queue_draw();
            }
            AppMsg::Quit => {
                relm4::main_application().quit();
            }
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        let saved = self.selector.borrow().save_state();
        if let Err(e) = state_file::store(&saved) {
            log::error!("failed to persist view state: {e}");
        }
    }
}
