//! End-to-end session behaviour over synthetic Holistic output

use pose_web::classifier::PoseLabel;
use pose_web::landmarks::{face, hand, FaceLandmarks, Frame, HandLandmarks};
use pose_web::session::{CalibrationState, HoldState, PoseSession, SessionEvent, StatusKind};

const FRAME_MS: f64 = 33.0;

/// Flat face mesh: forehead y=0.2, chin y=0.6, nose y=0.4, mouth at y=0.5
fn face_flat(mouth_width: f32, mouth_gap: f32, right_eye: f32, left_eye: f32) -> Vec<f32> {
    let mut points = vec![[0.5_f32, 0.45, 0.0]; 478];
    let mut set = |i: usize, x: f32, y: f32| points[i] = [x, y, 0.0];
    set(face::FOREHEAD_TOP, 0.5, 0.2);
    set(face::CHIN_TIP, 0.5, 0.6);
    set(face::NOSE_TIP, 0.5, 0.4);
    set(face::MOUTH_LEFT_CORNER, 0.5 - mouth_width / 2.0, 0.5);
    set(face::MOUTH_RIGHT_CORNER, 0.5 + mouth_width / 2.0, 0.5);
    set(face::UPPER_LIP_CENTER, 0.5, 0.5 - mouth_gap / 2.0);
    set(face::LOWER_LIP_CENTER, 0.5, 0.5 + mouth_gap / 2.0);
    set(face::RIGHT_EYE_TOP, 0.42, 0.33 - right_eye / 2.0);
    set(face::RIGHT_EYE_BOTTOM, 0.42, 0.33 + right_eye / 2.0);
    set(face::LEFT_EYE_TOP, 0.58, 0.33 - left_eye / 2.0);
    set(face::LEFT_EYE_BOTTOM, 0.58, 0.33 + left_eye / 2.0);
    points.concat()
}

fn neutral_face() -> FaceLandmarks {
    FaceLandmarks::from_flat(&face_flat(0.06, 0.02, 0.02, 0.02)).unwrap()
}

fn gaping_face() -> FaceLandmarks {
    FaceLandmarks::from_flat(&face_flat(0.07, 0.036, 0.02, 0.02)).unwrap()
}

fn winking_face() -> FaceLandmarks {
    FaceLandmarks::from_flat(&face_flat(0.06, 0.02, 0.02, 0.004)).unwrap()
}

/// Fist with every finger curled, wrist at (x, y)
fn fist(x: f32, y: f32) -> HandLandmarks {
    let mut flat = vec![[x, y, 0.0]; 21];
    flat[hand::THUMB_TIP] = [x - 0.04, y - 0.07, 0.0];
    for base in [hand::INDEX_MCP, hand::MIDDLE_MCP, hand::RING_MCP, hand::PINKY_MCP] {
        flat[base] = [x, y - 0.08, 0.0];
        flat[base + 1] = [x, y - 0.10, 0.0];
        flat[base + 2] = [x, y - 0.08, 0.0];
        flat[base + 3] = [x, y - 0.06, 0.0];
    }
    HandLandmarks::from_flat(&flat.concat()).unwrap()
}

/// Index finger raised with its tip at (x, y)
fn pointer(x: f32, y: f32) -> HandLandmarks {
    let mut flat = vec![[x, y + 0.25, 0.0]; 21];
    flat[hand::THUMB_TIP] = [x - 0.04, y + 0.14, 0.0];
    flat[hand::INDEX_MCP] = [x, y + 0.12, 0.0];
    flat[hand::INDEX_PIP] = [x, y + 0.06, 0.0];
    flat[hand::INDEX_DIP] = [x, y + 0.03, 0.0];
    flat[hand::INDEX_TIP] = [x, y, 0.0];
    for (tip, pip) in hand::CURLED_FINGERS {
        flat[pip] = [x + 0.03, y + 0.09, 0.0];
        flat[tip] = [x + 0.03, y + 0.13, 0.0];
    }
    HandLandmarks::from_flat(&flat.concat()).unwrap()
}

fn calibration_frame() -> Frame {
    Frame::new(Some(neutral_face()), Some(fist(0.85, 0.95)), Some(fist(0.15, 0.95)))
}

fn surprised_frame() -> Frame {
    Frame::new(Some(gaping_face()), Some(fist(0.4, 0.8)), Some(fist(0.6, 0.8)))
}

fn wink_frame() -> Frame {
    Frame::new(Some(winking_face()), None, Some(pointer(0.5, 0.5)))
}

fn confirmations(events: &[SessionEvent]) -> Vec<PoseLabel> {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::PoseConfirmed(p) => Some(*p),
            _ => None,
        })
        .collect()
}

/// Feed `frame` every FRAME_MS from `start` for `duration` ms
fn run(session: &mut PoseSession, frame: &Frame, start: f64, duration: f64) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    let mut t = start;
    while t <= start + duration {
        events.extend(session.on_frame(frame, t));
        t += FRAME_MS;
    }
    events
}

#[test]
fn nothing_happens_before_calibration() {
    let mut session = PoseSession::new();
    // No hands ever seen, so surprised-looking faces are ignored
    let face_only = Frame::new(Some(gaping_face()), None, None);
    let events = run(&mut session, &face_only, 0.0, 3000.0);
    assert_eq!(session.calibration_state(), CalibrationState::WaitingHands);
    assert!(confirmations(&events).is_empty());
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::PoseHint { .. })));
}

#[test]
fn full_photo_booth_cycle() {
    let mut session = PoseSession::new();

    let calibration = run(&mut session, &calibration_frame(), 0.0, 1000.0);
    assert!(calibration.contains(&SessionEvent::CalibrationComplete));
    assert!(calibration.contains(&SessionEvent::CalibrationHidden));
    assert!(session.is_active());

    // Surprised, held for 3s: exactly one capture
    let held = run(&mut session, &surprised_frame(), 2000.0, 3000.0);
    assert_eq!(confirmations(&held), vec![PoseLabel::Surprised]);
    assert!(matches!(session.hold_state(), HoldState::Cooldown { until: None }));

    // Popup still open: switching pose does nothing
    let blocked = run(&mut session, &wink_frame(), 5100.0, 2000.0);
    assert!(confirmations(&blocked).is_empty());
    assert!(blocked.contains(&SessionEvent::PoseHint { active: Some(PoseLabel::Wink), warn: None }));

    let ack = session.acknowledge_popup_dismissed(7200.0);
    assert_eq!(
        ack,
        vec![SessionEvent::Status { message: "Strike a pose! \u{1F412}", kind: StatusKind::Idle }]
    );

    // Release delay then a fresh wink hold
    let resumed = run(&mut session, &wink_frame(), 7300.0, 3000.0);
    assert_eq!(confirmations(&resumed), vec![PoseLabel::Wink]);
}

#[test]
fn flickering_pose_never_confirms() {
    let mut session = PoseSession::new();
    run(&mut session, &calibration_frame(), 0.0, 1000.0);

    let pose = surprised_frame();
    let gap = Frame::new(Some(neutral_face()), None, None);
    let mut events = Vec::new();
    let mut t = 2000.0;
    // 1s on, one dropped frame, repeat
    for _ in 0..5 {
        events.extend(run(&mut session, &pose, t, 1000.0));
        t += 1000.0 + FRAME_MS;
        events.extend(session.on_frame(&gap, t));
        t += FRAME_MS;
    }
    assert!(confirmations(&events).is_empty());
}

#[test]
fn losing_hands_after_calibration_keeps_session_active() {
    let mut session = PoseSession::new();
    run(&mut session, &calibration_frame(), 0.0, 100.0);
    let events = run(&mut session, &Frame::default(), 200.0, 1000.0);
    assert!(events.contains(&SessionEvent::CalibrationHidden));
    assert_eq!(session.calibration_state(), CalibrationState::Ready);
    assert!(session.is_active());
}

#[test]
fn pose_held_through_calibration_screen_is_timed_from_hide() {
    let mut session = PoseSession::new();
    let events = run(&mut session, &surprised_frame(), 0.0, 2000.0);

    // Hidden at 726; the hold starts there and confirms at 1947, not 1221
    assert_eq!(confirmations(&events), vec![PoseLabel::Surprised]);
    let hidden = events.iter().position(|e| *e == SessionEvent::CalibrationHidden).unwrap();
    let captured = events.iter().position(|e| matches!(e, SessionEvent::PoseConfirmed(_))).unwrap();
    let holding = SessionEvent::Status { message: "Hold it... \u{1F412}", kind: StatusKind::Holding };
    let hold_it: Vec<_> = events.iter().enumerate().filter(|(_, e)| **e == holding).map(|(i, _)| i).collect();
    assert_eq!(hold_it.len(), 1);
    assert!(hidden < hold_it[0] && hold_it[0] < captured);
    // "Hold it..." stays up until the capture
    assert!(!events[hold_it[0]..captured]
        .iter()
        .any(|e| matches!(e, SessionEvent::Status { kind: StatusKind::Idle, .. })));
}
