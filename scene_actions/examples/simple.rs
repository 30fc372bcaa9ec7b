use scene_actions::{ActionManager, Behavior, Point, SpriteNode, Status};

/// This sprite runs no custom actions
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
enum NoAction {}

impl scene_actions::ToAction<SpriteNode> for NoAction {
    fn to_action(self) -> scene_actions::Action<SpriteNode> {
        match self {}
    }
}

fn main() {
    let behavior: Behavior<NoAction> = Behavior::Sequence(vec![
        Behavior::Place(Point::new(200.0, 200.0)),
        Behavior::Repeat(
            3,
            Box::new(Behavior::Sequence(vec![
                Behavior::ToggleVisibility,
                Behavior::Wait(0.25),
            ])),
        ),
        Behavior::FlipX(true),
        Behavior::Show,
    ]);
    let output = serde_json::to_string_pretty(&behavior).unwrap();
    println!("Behavior:\n{output}");

    let mut manager = ActionManager::new(SpriteNode::new());
    let state = manager.run_behavior(behavior).unwrap();

    let mut frame = 0;
    while state.status() != Some(Status::Done) {
        manager.tick(1.0 / 60.0);
        frame += 1;
        println!("Frame {frame}: {:?}", manager.target());
    }

    assert_eq!(manager.target().position, Point::new(200.0, 200.0));
    assert!(manager.target().visible);
    assert!(manager.target().flip_x);
}
